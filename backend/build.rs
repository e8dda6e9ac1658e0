use std::fs;
use std::io::ErrorKind;
use std::path::Path;

// Copies the trunk output of the frontend next to the backend so the server
// can serve it from `static/dist`.
fn main() {
    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        match fs::remove_dir_all(out_dir) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => println!("cargo:warning=cannot clear backend/static: {}", e),
        }
        fs::create_dir_all(out_dir).expect("cannot create backend/static");
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true),
        )
        .expect("cannot copy frontend/dist into backend/static");
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
