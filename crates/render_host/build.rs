// build.rs
// Generates the OpenGL bindings used by the fixed-function pipeline.
//
// The triangle is drawn with the legacy matrix stack and immediate-mode vertex
// submission, so the bindings target the 2.1 compatibility profile rather than
// a core profile.

use gl_generator::{Api, Fallbacks, GlobalGenerator, Profile, Registry};
use std::env;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    let mut bindings = BufWriter::new(File::create(out_dir.join("gl_bindings.rs"))?);

    Registry::new(Api::Gl, (2, 1), Profile::Compatibility, Fallbacks::All, [])
        .write_bindings(GlobalGenerator, &mut bindings)?;

    Ok(())
}
