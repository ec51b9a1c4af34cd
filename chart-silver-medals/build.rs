use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("medals.csv");

    // Copy medals.csv to OUT_DIR for include_str. Without the fixture the
    // app still builds and shows an empty chart.
    let medals_src = Path::new("../fixtures/medals.csv");
    if medals_src.exists() {
        // Reject a fixture the app would refuse at startup anyway.
        let mut rdr = csv::Reader::from_path(medals_src).expect("Failed to open medals.csv");
        let headers = rdr.headers().expect("medals.csv has no header row").clone();
        for column in ["Year", "Country", "City", "Medal"] {
            assert!(
                headers.iter().any(|h| h.trim() == column),
                "medals.csv is missing the {} column",
                column
            );
        }
        fs::copy(medals_src, &dest).unwrap();
    } else {
        fs::write(&dest, "Year,City,Sport,Discipline,Athlete,Country,Gender,Event,Medal\n").unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/medals.csv");
}
