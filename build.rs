#[cfg(target_os = "windows")]
fn main() {
    use winresource::WindowsResource;

    // res/rolo.ico must exist for the Windows build
    let mut res = WindowsResource::new();
    res.set_icon("res/rolo.ico")
        .set("FileDescription", "Rolo CLI")
        .set("ProductName", "Rolo")
        .set("OriginalFilename", "rolo.exe")
        .set("FileVersion", env!("CARGO_PKG_VERSION"))
        .set("ProductVersion", env!("CARGO_PKG_VERSION"))
        .compile()
        .expect("Failed to embed icon resource");
}

#[cfg(not(target_os = "windows"))]
fn main() {}
