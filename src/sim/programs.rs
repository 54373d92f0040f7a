//! Built-in field programs
//!
//! Generated with `fieldc encode <pattern> --format rust`; regenerate rather
//! than editing by hand.

/// Four spokes turning one column every two ticks (64 tick loop)
pub const ROTOR: [u8; 339] = [
    0x10, 0x00, 0x01, 0x02, 0x03, 0x20, 0x21, 0x22, 0x23, 0x40, 0x41, 0x42, 0x43, 0x60, 0x61, 0x62,
    0x63, 0x01, 0x08, 0x03, 0x1f, 0x23, 0x3f, 0x43, 0x5f, 0x63, 0x7f, 0x01, 0x08, 0x02, 0x1e, 0x22,
    0x3e, 0x42, 0x5e, 0x62, 0x7e, 0x01, 0x08, 0x01, 0x1d, 0x21, 0x3d, 0x41, 0x5d, 0x61, 0x7d, 0x01,
    0x08, 0x00, 0x1c, 0x20, 0x3c, 0x40, 0x5c, 0x60, 0x7c, 0x01, 0x08, 0x1b, 0x1f, 0x3b, 0x3f, 0x5b,
    0x5f, 0x7b, 0x7f, 0x01, 0x08, 0x1a, 0x1e, 0x3a, 0x3e, 0x5a, 0x5e, 0x7a, 0x7e, 0x01, 0x08, 0x19,
    0x1d, 0x39, 0x3d, 0x59, 0x5d, 0x79, 0x7d, 0x01, 0x08, 0x18, 0x1c, 0x38, 0x3c, 0x58, 0x5c, 0x78,
    0x7c, 0x01, 0x08, 0x17, 0x1b, 0x37, 0x3b, 0x57, 0x5b, 0x77, 0x7b, 0x01, 0x08, 0x16, 0x1a, 0x36,
    0x3a, 0x56, 0x5a, 0x76, 0x7a, 0x01, 0x08, 0x15, 0x19, 0x35, 0x39, 0x55, 0x59, 0x75, 0x79, 0x01,
    0x08, 0x14, 0x18, 0x34, 0x38, 0x54, 0x58, 0x74, 0x78, 0x01, 0x08, 0x13, 0x17, 0x33, 0x37, 0x53,
    0x57, 0x73, 0x77, 0x01, 0x08, 0x12, 0x16, 0x32, 0x36, 0x52, 0x56, 0x72, 0x76, 0x01, 0x08, 0x11,
    0x15, 0x31, 0x35, 0x51, 0x55, 0x71, 0x75, 0x01, 0x08, 0x10, 0x14, 0x30, 0x34, 0x50, 0x54, 0x70,
    0x74, 0x01, 0x08, 0x0f, 0x13, 0x2f, 0x33, 0x4f, 0x53, 0x6f, 0x73, 0x01, 0x08, 0x0e, 0x12, 0x2e,
    0x32, 0x4e, 0x52, 0x6e, 0x72, 0x01, 0x08, 0x0d, 0x11, 0x2d, 0x31, 0x4d, 0x51, 0x6d, 0x71, 0x01,
    0x08, 0x0c, 0x10, 0x2c, 0x30, 0x4c, 0x50, 0x6c, 0x70, 0x01, 0x08, 0x0b, 0x0f, 0x2b, 0x2f, 0x4b,
    0x4f, 0x6b, 0x6f, 0x01, 0x08, 0x0a, 0x0e, 0x2a, 0x2e, 0x4a, 0x4e, 0x6a, 0x6e, 0x01, 0x08, 0x09,
    0x0d, 0x29, 0x2d, 0x49, 0x4d, 0x69, 0x6d, 0x01, 0x08, 0x08, 0x0c, 0x28, 0x2c, 0x48, 0x4c, 0x68,
    0x6c, 0x01, 0x08, 0x07, 0x0b, 0x27, 0x2b, 0x47, 0x4b, 0x67, 0x6b, 0x01, 0x08, 0x06, 0x0a, 0x26,
    0x2a, 0x46, 0x4a, 0x66, 0x6a, 0x01, 0x08, 0x05, 0x09, 0x25, 0x29, 0x45, 0x49, 0x65, 0x69, 0x01,
    0x08, 0x04, 0x08, 0x24, 0x28, 0x44, 0x48, 0x64, 0x68, 0x01, 0x08, 0x03, 0x07, 0x23, 0x27, 0x43,
    0x47, 0x63, 0x67, 0x01, 0x08, 0x02, 0x06, 0x22, 0x26, 0x42, 0x46, 0x62, 0x66, 0x01, 0x08, 0x01,
    0x05, 0x21, 0x25, 0x41, 0x45, 0x61, 0x65, 0x01, 0x08, 0x00, 0x04, 0x20, 0x24, 0x40, 0x44, 0x60,
    0x64, 0x00, 0x00,
];

/// Two opposite sector gates stepping round every 16 ticks (64 tick loop)
pub const GATES: [u8; 299] = [
    0x20, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
    0x0f, 0x40, 0x41, 0x42, 0x43, 0x44, 0x45, 0x46, 0x47, 0x48, 0x49, 0x4a, 0x4b, 0x4c, 0x4d, 0x4e,
    0x4f, 0x0f, 0x40, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c,
    0x0d, 0x0e, 0x0f, 0x30, 0x31, 0x32, 0x33, 0x34, 0x35, 0x36, 0x37, 0x38, 0x39, 0x3a, 0x3b, 0x3c,
    0x3d, 0x3e, 0x3f, 0x40, 0x41, 0x42, 0x43, 0x44, 0x45, 0x46, 0x47, 0x48, 0x49, 0x4a, 0x4b, 0x4c,
    0x4d, 0x4e, 0x4f, 0x70, 0x71, 0x72, 0x73, 0x74, 0x75, 0x76, 0x77, 0x78, 0x79, 0x7a, 0x7b, 0x7c,
    0x7d, 0x7e, 0x7f, 0x0f, 0x40, 0x20, 0x21, 0x22, 0x23, 0x24, 0x25, 0x26, 0x27, 0x28, 0x29, 0x2a,
    0x2b, 0x2c, 0x2d, 0x2e, 0x2f, 0x30, 0x31, 0x32, 0x33, 0x34, 0x35, 0x36, 0x37, 0x38, 0x39, 0x3a,
    0x3b, 0x3c, 0x3d, 0x3e, 0x3f, 0x60, 0x61, 0x62, 0x63, 0x64, 0x65, 0x66, 0x67, 0x68, 0x69, 0x6a,
    0x6b, 0x6c, 0x6d, 0x6e, 0x6f, 0x70, 0x71, 0x72, 0x73, 0x74, 0x75, 0x76, 0x77, 0x78, 0x79, 0x7a,
    0x7b, 0x7c, 0x7d, 0x7e, 0x7f, 0x0f, 0x40, 0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18,
    0x19, 0x1a, 0x1b, 0x1c, 0x1d, 0x1e, 0x1f, 0x20, 0x21, 0x22, 0x23, 0x24, 0x25, 0x26, 0x27, 0x28,
    0x29, 0x2a, 0x2b, 0x2c, 0x2d, 0x2e, 0x2f, 0x50, 0x51, 0x52, 0x53, 0x54, 0x55, 0x56, 0x57, 0x58,
    0x59, 0x5a, 0x5b, 0x5c, 0x5d, 0x5e, 0x5f, 0x60, 0x61, 0x62, 0x63, 0x64, 0x65, 0x66, 0x67, 0x68,
    0x69, 0x6a, 0x6b, 0x6c, 0x6d, 0x6e, 0x6f, 0x0f, 0x40, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06,
    0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f, 0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16,
    0x17, 0x18, 0x19, 0x1a, 0x1b, 0x1c, 0x1d, 0x1e, 0x1f, 0x40, 0x41, 0x42, 0x43, 0x44, 0x45, 0x46,
    0x47, 0x48, 0x49, 0x4a, 0x4b, 0x4c, 0x4d, 0x4e, 0x4f, 0x50, 0x51, 0x52, 0x53, 0x54, 0x55, 0x56,
    0x57, 0x58, 0x59, 0x5a, 0x5b, 0x5c, 0x5d, 0x5e, 0x5f, 0x00, 0x00,
];

/// A wedge opening round the field and closing behind itself (128 tick loop)
pub const SWEEP: [u8; 515] = [
    0x00, 0x00, 0x02, 0x00, 0x01, 0x00, 0x02, 0x02, 0x03, 0x00, 0x02, 0x04, 0x05, 0x00, 0x02, 0x06,
    0x07, 0x00, 0x02, 0x08, 0x09, 0x00, 0x02, 0x0a, 0x0b, 0x00, 0x02, 0x0c, 0x0d, 0x00, 0x02, 0x0e,
    0x0f, 0x00, 0x02, 0x10, 0x11, 0x00, 0x02, 0x12, 0x13, 0x00, 0x02, 0x14, 0x15, 0x00, 0x02, 0x16,
    0x17, 0x00, 0x02, 0x18, 0x19, 0x00, 0x02, 0x1a, 0x1b, 0x00, 0x02, 0x1c, 0x1d, 0x00, 0x02, 0x1e,
    0x1f, 0x00, 0x02, 0x20, 0x21, 0x00, 0x02, 0x22, 0x23, 0x00, 0x02, 0x24, 0x25, 0x00, 0x02, 0x26,
    0x27, 0x00, 0x02, 0x28, 0x29, 0x00, 0x02, 0x2a, 0x2b, 0x00, 0x02, 0x2c, 0x2d, 0x00, 0x02, 0x2e,
    0x2f, 0x00, 0x02, 0x30, 0x31, 0x00, 0x02, 0x32, 0x33, 0x00, 0x02, 0x34, 0x35, 0x00, 0x02, 0x36,
    0x37, 0x00, 0x02, 0x38, 0x39, 0x00, 0x02, 0x3a, 0x3b, 0x00, 0x02, 0x3c, 0x3d, 0x00, 0x02, 0x3e,
    0x3f, 0x00, 0x02, 0x40, 0x41, 0x00, 0x02, 0x42, 0x43, 0x00, 0x02, 0x44, 0x45, 0x00, 0x02, 0x46,
    0x47, 0x00, 0x02, 0x48, 0x49, 0x00, 0x02, 0x4a, 0x4b, 0x00, 0x02, 0x4c, 0x4d, 0x00, 0x02, 0x4e,
    0x4f, 0x00, 0x02, 0x50, 0x51, 0x00, 0x02, 0x52, 0x53, 0x00, 0x02, 0x54, 0x55, 0x00, 0x02, 0x56,
    0x57, 0x00, 0x02, 0x58, 0x59, 0x00, 0x02, 0x5a, 0x5b, 0x00, 0x02, 0x5c, 0x5d, 0x00, 0x02, 0x5e,
    0x5f, 0x00, 0x02, 0x60, 0x61, 0x00, 0x02, 0x62, 0x63, 0x00, 0x02, 0x64, 0x65, 0x00, 0x02, 0x66,
    0x67, 0x00, 0x02, 0x68, 0x69, 0x00, 0x02, 0x6a, 0x6b, 0x00, 0x02, 0x6c, 0x6d, 0x00, 0x02, 0x6e,
    0x6f, 0x00, 0x02, 0x70, 0x71, 0x00, 0x02, 0x72, 0x73, 0x00, 0x02, 0x74, 0x75, 0x00, 0x02, 0x76,
    0x77, 0x00, 0x02, 0x78, 0x79, 0x00, 0x02, 0x7a, 0x7b, 0x00, 0x02, 0x7c, 0x7d, 0x00, 0x02, 0x7e,
    0x7f, 0x00, 0x02, 0x00, 0x01, 0x00, 0x02, 0x02, 0x03, 0x00, 0x02, 0x04, 0x05, 0x00, 0x02, 0x06,
    0x07, 0x00, 0x02, 0x08, 0x09, 0x00, 0x02, 0x0a, 0x0b, 0x00, 0x02, 0x0c, 0x0d, 0x00, 0x02, 0x0e,
    0x0f, 0x00, 0x02, 0x10, 0x11, 0x00, 0x02, 0x12, 0x13, 0x00, 0x02, 0x14, 0x15, 0x00, 0x02, 0x16,
    0x17, 0x00, 0x02, 0x18, 0x19, 0x00, 0x02, 0x1a, 0x1b, 0x00, 0x02, 0x1c, 0x1d, 0x00, 0x02, 0x1e,
    0x1f, 0x00, 0x02, 0x20, 0x21, 0x00, 0x02, 0x22, 0x23, 0x00, 0x02, 0x24, 0x25, 0x00, 0x02, 0x26,
    0x27, 0x00, 0x02, 0x28, 0x29, 0x00, 0x02, 0x2a, 0x2b, 0x00, 0x02, 0x2c, 0x2d, 0x00, 0x02, 0x2e,
    0x2f, 0x00, 0x02, 0x30, 0x31, 0x00, 0x02, 0x32, 0x33, 0x00, 0x02, 0x34, 0x35, 0x00, 0x02, 0x36,
    0x37, 0x00, 0x02, 0x38, 0x39, 0x00, 0x02, 0x3a, 0x3b, 0x00, 0x02, 0x3c, 0x3d, 0x00, 0x02, 0x3e,
    0x3f, 0x00, 0x02, 0x40, 0x41, 0x00, 0x02, 0x42, 0x43, 0x00, 0x02, 0x44, 0x45, 0x00, 0x02, 0x46,
    0x47, 0x00, 0x02, 0x48, 0x49, 0x00, 0x02, 0x4a, 0x4b, 0x00, 0x02, 0x4c, 0x4d, 0x00, 0x02, 0x4e,
    0x4f, 0x00, 0x02, 0x50, 0x51, 0x00, 0x02, 0x52, 0x53, 0x00, 0x02, 0x54, 0x55, 0x00, 0x02, 0x56,
    0x57, 0x00, 0x02, 0x58, 0x59, 0x00, 0x02, 0x5a, 0x5b, 0x00, 0x02, 0x5c, 0x5d, 0x00, 0x02, 0x5e,
    0x5f, 0x00, 0x02, 0x60, 0x61, 0x00, 0x02, 0x62, 0x63, 0x00, 0x02, 0x64, 0x65, 0x00, 0x02, 0x66,
    0x67, 0x00, 0x02, 0x68, 0x69, 0x00, 0x02, 0x6a, 0x6b, 0x00, 0x02, 0x6c, 0x6d, 0x00, 0x02, 0x6e,
    0x6f, 0x00, 0x02, 0x70, 0x71, 0x00, 0x02, 0x72, 0x73, 0x00, 0x02, 0x74, 0x75, 0x00, 0x02, 0x76,
    0x77, 0x00, 0x02, 0x78, 0x79, 0x00, 0x02, 0x7a, 0x7b, 0x00, 0x02, 0x7c, 0x7d, 0x00, 0x02, 0x7e,
    0x7f, 0x00, 0x00,
];
