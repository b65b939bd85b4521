use std::env;
use std::fs;
use std::path::Path;

const VINTAGES: [&str; 3] = ["2020", "2022", "2024"];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Copy each vintage's fixture to OUT_DIR for include_str. A fixture that
    // is missing or has no data rows is replaced by a header-only file so the
    // app still builds and logs a warning for the empty vintage at runtime.
    for year in VINTAGES {
        let name = format!("land_use_{}.csv", year);
        let src = Path::new("../fixtures").join(&name);
        let dest = Path::new(&out_dir).join(&name);

        let rows = if src.exists() {
            csv::ReaderBuilder::new()
                .has_headers(true)
                .flexible(true)
                .from_path(&src)
                .map(|mut rdr| rdr.records().flatten().count())
                .unwrap_or(0)
        } else {
            0
        };

        if rows > 0 {
            fs::copy(&src, &dest).unwrap();
        } else {
            println!("cargo:warning={} has no data rows", src.display());
            fs::write(&dest, "Site_Name,Total_Area_sq_km\n").unwrap();
        }
        println!("cargo:rerun-if-changed=../fixtures/{}", name);
    }

    println!("cargo:rerun-if-changed=build.rs");
}
