//! Command frames written to the LED strip.

/// A command accepted by the service and forwarded to the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceCommand {
    PowerOn,
    PowerOff,
    Color { red: u8, green: u8, blue: u8 },
}

impl DeviceCommand {
    /// Raw bytes for the device's write characteristic.
    pub fn to_frame(&self) -> Vec<u8> {
        match *self {
            DeviceCommand::PowerOn => vec![0x69, 0x96, 0x02, 0x01, 0x01],
            DeviceCommand::PowerOff => vec![0x69, 0x96, 0x02, 0x01, 0x00],
            DeviceCommand::Color { red, green, blue } => {
                vec![0x69, 0x96, 0x05, 0x02, red, green, blue]
            }
        }
    }
}

/// Parse `#RGB` or `#RRGGBB` into components. `#RGB` doubles each digit.
pub fn parse_hex_color(input: &str) -> Option<(u8, u8, u8)> {
    let digits = input.strip_prefix('#')?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match digits.len() {
        6 => Some((channel(&digits[0..2])?, channel(&digits[2..4])?, channel(&digits[4..6])?)),
        3 => {
            let short = |i: usize| channel(&digits[i..i + 1]).map(|v| v * 0x11);
            Some((short(0)?, short(1)?, short(2)?))
        }
        _ => None,
    }
}
