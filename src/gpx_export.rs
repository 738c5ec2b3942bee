//! GPX emitter: a fixed GPX 1.1 document containing the two
//! station waypoints and the merged trajectory, written directly
//! rather than through a general-purpose GPX library so that the byte
//! output stays deterministic (no timestamps, no locale-dependent
//! number formatting) given identical inputs.

use crate::geodesy::Geodetic;
use crate::station::Station;
use crate::trajectory::TrajectoryPoint;
use std::io::{self, Write};

const CREATOR: &str = "meteor-trajectory";

fn write_wpt(w: &mut impl Write, label: &str, g: &Geodetic) -> io::Result<()> {
    writeln!(
        w,
        "  <wpt lat=\"{:.6}\" lon=\"{:.6}\"><ele>{:.1}</ele><name>{}</name></wpt>",
        g.lat_deg, g.lon_deg, g.height_m, escape(label)
    )
}

fn write_trkpt(w: &mut impl Write, g: &Geodetic) -> io::Result<()> {
    writeln!(w, "      <trkpt lat=\"{:.6}\" lon=\"{:.6}\"><ele>{:.1}</ele></trkpt>", g.lat_deg, g.lon_deg, g.height_m)
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;").replace('"', "&quot;")
}

/// Writes the fixed GPX 1.1 document: one `<metadata>`, two `<wpt>`
/// elements (the stations, labeled), and two `<trk>` elements — the
/// computed merged trajectory and, when supplied, a reference
/// "correct" segment built from the detection file's summary
/// start/end endpoints.
pub fn write_gpx(
    w: &mut impl Write,
    station_a: &Station,
    station_b: &Station,
    merged: &[TrajectoryPoint],
    reference_segment: Option<&[Geodetic]>,
) -> io::Result<()> {
    writeln!(w, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
    writeln!(
        w,
        "<gpx version=\"1.1\" creator=\"{}\" xmlns=\"http://www.topografix.com/GPX/1/1\">",
        CREATOR
    )?;
    writeln!(w, "  <metadata><name>meteor trajectory</name></metadata>")?;

    write_wpt(w, &station_a.label, &station_a.geodetic)?;
    write_wpt(w, &station_b.label, &station_b.geodetic)?;

    writeln!(w, "  <trk>")?;
    writeln!(w, "    <name>trajectory</name>")?;
    writeln!(w, "    <trkseg>")?;
    for point in merged {
        write_trkpt(w, &point.geodetic)?;
    }
    writeln!(w, "    </trkseg>")?;
    writeln!(w, "  </trk>")?;

    writeln!(w, "  <trk>")?;
    writeln!(w, "    <name>reference</name>")?;
    writeln!(w, "    <trkseg>")?;
    for point in reference_segment.unwrap_or(&[]) {
        write_trkpt(w, point)?;
    }
    writeln!(w, "    </trkseg>")?;
    writeln!(w, "  </trk>")?;

    writeln!(w, "</gpx>")
}
