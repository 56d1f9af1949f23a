//! UCI engine options.

pub const MIN_DEPTH: i32 = 1;
pub const MAX_DEPTH: i32 = 30;

pub struct UciOptions {
    pub depth: i32,
    pub hash_mb: usize,
}

impl UciOptions {
    #[must_use]
    pub fn new() -> Self {
        UciOptions {
            depth: 10,
            hash_mb: 64,
        }
    }

    /// Emit the identification block and the supported options.
    pub fn print(&self) {
        println!("id name NanoChess");
        println!("id author NanoChess contributors");
        println!(
            "option name Depth type spin default {} min {} max {}",
            self.depth, MIN_DEPTH, MAX_DEPTH
        );
        println!(
            "option name Hash type spin default {} min 1 max 1024",
            self.hash_mb
        );
        println!("uciok");
    }

    /// Apply a `setoption` name/value pair. Unknown options are ignored.
    pub fn apply_setoption(&mut self, name: &str, value: Option<&str>) {
        match name {
            "Depth" => {
                if let Some(v) = value.and_then(|v| v.parse::<i32>().ok()) {
                    self.depth = v.clamp(MIN_DEPTH, MAX_DEPTH);
                }
            }
            "Hash" => {
                // Accepted for GUI compatibility; the table is fixed-size
                if let Some(v) = value.and_then(|v| v.parse::<usize>().ok()) {
                    self.hash_mb = v.clamp(1, 1024);
                }
            }
            _ => {}
        }
    }
}

impl Default for UciOptions {
    fn default() -> Self {
        UciOptions::new()
    }
}
