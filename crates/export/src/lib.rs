//! Export helpers for CSV and JSON artifacts.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod states {
    use std::io::{self, Write};

    const HEADER: &str = "body,elapsed_days,date_utc,x,y,z,rotation_y";

    /// Write the body-state CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// One body sampled at one simulation time.
    #[derive(Debug, Clone)]
    pub struct StateRecord<'a> {
        pub body: &'a str,
        pub elapsed_days: f64,
        pub date_utc: &'a str,
        pub position: [f64; 3],
        pub rotation_y: f64,
    }

    impl StateRecord<'_> {
        /// Serialize the record to CSV, matching the header ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{},{:.6},{},{:.6},{:.6},{:.6},{:.6}",
                self.body,
                self.elapsed_days,
                self.date_utc,
                self.position[0],
                self.position[1],
                self.position[2],
                self.rotation_y,
            )
        }
    }
}

pub mod trajectory {
    use std::io::{self, Write};

    const HEADER: &str = "step,time,ship_x,ship_y,ship_vx,ship_vy,radius,state";

    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// Ship sample from a legacy transfer run (planar, z omitted).
    #[derive(Debug, Clone)]
    pub struct TrajectoryRecord<'a> {
        pub step: u64,
        pub time: f64,
        pub position: [f64; 3],
        pub velocity: [f64; 3],
        pub radius: f64,
        pub state: &'a str,
    }

    impl TrajectoryRecord<'_> {
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{},{:.4},{:.6},{:.6},{:.6},{:.6},{:.6},{}",
                self.step,
                self.time,
                self.position[0],
                self.position[1],
                self.velocity[0],
                self.velocity[1],
                self.radius,
                self.state,
            )
        }
    }
}

pub mod paths {
    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::io::{self, Write};

    /// Sampled orbit polyline of one body.
    #[derive(Debug, Clone, Serialize)]
    pub struct OrbitPath<'a> {
        pub name: &'a str,
        pub points: &'a [[f64; 3]],
    }

    /// Write all orbit paths as one pretty-printed JSON array.
    pub fn write_orbit_paths(writer: &mut dyn Write, paths: &[OrbitPath<'_>]) -> io::Result<()> {
        to_writer_pretty(&mut *writer, paths)?;
        writeln!(writer)
    }
}
