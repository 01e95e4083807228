// apdukit/src/constants.rs
//! Common protocol constants used across the crate

/// Maximum data length encodable in a single short-form Lc byte
pub const MAX_SHORT_APDU_DATA_LEN: usize = 255;

/// Minimum length of a decodable response: SW1 + SW2
pub const MIN_RESPONSE_LEN: usize = 2;

/// First block index visited by the brute-force scan
pub const BRUTE_FORCE_FIRST_BLOCK: u8 = 0x00;

/// Last block index visited by the brute-force scan (inclusive)
pub const BRUTE_FORCE_LAST_BLOCK: u8 = 0x0F;

/// Completion marker emitted after the last scanned block
pub const BRUTE_FORCE_COMPLETE: &str = "Brute-force complete.";

/// Generic failure text rendered for device faults under the Simple policy
pub const SIMPLE_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

/// Fixed applet image flashed by the install operation. Placeholder
/// payload; installing a real applet would supply a CAP file here.
pub const APPLET_IMAGE: [u8; 4] = [0xC9, 0x01, 0x02, 0x03];
