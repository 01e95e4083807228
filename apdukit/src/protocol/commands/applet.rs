use crate::constants::APPLET_IMAGE;
use crate::protocol::ApduCommand;

/// SELECT the payment applet hosted on a Java Card.
pub fn build_select_applet() -> ApduCommand {
    ApduCommand::new(0x00, 0xA4, 0x04, 0x00).with_le(0x0A)
}

/// Read-record command driven after the applet SELECT during payment
/// card emulation.
pub fn build_emulation_read() -> ApduCommand {
    ApduCommand::new(0x00, 0xB2, 0x01, 0x0C).with_le(0x00)
}

/// INSTALL command carrying the fixed applet image.
pub fn build_install_applet() -> ApduCommand {
    ApduCommand::new(0x80, 0xE6, 0x02, 0x00).with_fixed_data(&APPLET_IMAGE)
}
