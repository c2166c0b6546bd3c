//! Host-side helper: `cargo run` builds the wasm bundle into `static/pkg` and
//! serves `static/` on http://127.0.0.1:8000.

use std::process::{exit, Command};

const PORT: &str = "8000";

fn main() {
    println!("Building WASM pkg …");
    match Command::new("wasm-pack")
        .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
        .status()
    {
        Ok(st) if st.success() => {}
        Ok(_) => {
            eprintln!("wasm-pack finished with errors.");
            exit(1);
        }
        Err(_) => {
            eprintln!("wasm-pack not found in PATH. Serving whatever is already in static/pkg.");
        }
    }

    println!("Serving static/ at http://127.0.0.1:{PORT} (Ctrl-C to stop) …");
    let server = Command::new("python3")
        .args(["-m", "http.server", PORT, "--directory", "static"])
        .status();

    match server {
        Ok(st) if st.success() => {}
        Ok(st) => {
            eprintln!("http server exited with {st}");
            exit(1);
        }
        Err(err) => {
            eprintln!("failed to start python3 http.server: {err}");
            exit(1);
        }
    }
}
