use std::io::{self, Write};

use llh_core::EcefCoord;

/// Write x, y and z, one per line, in shortest round-trip form
pub fn write_ecef<W: Write>(out: &mut W, ecef: &EcefCoord) -> io::Result<()> {
    writeln!(out, "{:?}", ecef.x)?;
    writeln!(out, "{:?}", ecef.y)?;
    writeln!(out, "{:?}", ecef.z)?;
    out.flush()
}
