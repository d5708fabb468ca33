use crate::time_types::{Timestamp, TruncatedTimestamp};

/// Expand a truncated per-packet timestamp to a full UTC time.
///
/// Packets carry only the low 8 bits of the second counter;
/// `hardware_seconds` is a fresh read of the full counter and supplies the
/// missing high bits. Within each 256-second window there are two candidate
/// expansions near `hardware_seconds`; the comparison of the 8-bit residues
/// picks the consistent one, and an equal residue means the packet was
/// stamped in the counter's current window, so no wraparound correction
/// applies.
///
/// Total over all inputs. A counter sitting within 256 seconds of the epoch
/// wraps the subtraction, the same way the hardware counter itself wraps.
pub fn reconstruct(packet: TruncatedTimestamp, hardware_seconds: u32) -> Timestamp {
    let hw_low = (hardware_seconds & 0xff) as u8;

    let seconds = if hw_low >= packet.seconds {
        hardware_seconds.wrapping_sub(u32::from(hw_low - packet.seconds))
    } else {
        // The live counter's low byte already wrapped past the packet's.
        hardware_seconds
            .wrapping_sub(256)
            .wrapping_add(u32::from(packet.seconds - hw_low))
    };

    Timestamp {
        seconds,
        nanoseconds: packet.nanoseconds,
    }
}
