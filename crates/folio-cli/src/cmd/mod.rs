pub mod config;
pub mod contact;
pub mod hire;
pub mod options;
pub mod serve;

use folio_core::dispatch::DeliveryChannel;

/// Hand a mailto/web link to the desktop. Failure is reported, not fatal:
/// the message has already been printed.
pub(crate) fn open_link(channel: DeliveryChannel, target: &str) {
    match open::that(target) {
        Ok(()) => eprintln!("Opened {}", channel.label()),
        Err(e) => eprintln!("warning: could not open {}: {e}", channel.label()),
    }
}

/// Clap parser for `--open`: only the link channels make sense there.
pub(crate) fn parse_link_channel(s: &str) -> Result<DeliveryChannel, String> {
    let channel: DeliveryChannel = s.parse().map_err(|e| format!("{e}"))?;
    if !channel.is_link() {
        return Err(format!("'{s}' is not a link; use --copy for the clipboard"));
    }
    Ok(channel)
}

/// Report the outcome of a `--copy`.
pub(crate) fn report_copy(copied: bool) {
    if copied {
        eprintln!("Copied!");
    } else {
        eprintln!("warning: could not write to the clipboard");
    }
}
