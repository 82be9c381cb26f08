use clap::{App, load_yaml};

use dogs_mwcp::compact_instance::CompactInstance;
use dogs_mwcp::report::{check_report, read_report_file, ReportCheck};

/** checks a solution report. prints its weight if valid, the reason otherwise (exit status 1) */
pub fn main() {
    // parse arguments
    let yaml = load_yaml!("mwcp_checker.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let inst_filename = main_args.value_of("instance").unwrap_or_default();
    let sol_filename = main_args.value_of("solution").unwrap_or_default();
    // read files
    let instance = match CompactInstance::from_file(inst_filename) {
        Ok(inst) => inst,
        Err(e) => { eprintln!("Error: {}: {}", inst_filename, e); std::process::exit(1); }
    };
    let report = match read_report_file(sol_filename) {
        Ok(r) => r,
        Err(e) => { eprintln!("Error: {}: {}", sol_filename, e); std::process::exit(1); }
    };
    // call checker
    match check_report(&instance, &report) {
        ReportCheck::Ok(w) => {
            println!("{}", w);
            return;
        },
        ReportCheck::UnknownVertex(v) => {
            println!("ERROR: vertex {} does not exist", v+1);
        },
        ReportCheck::VertexAddedTwice(v) => {
            println!("ERROR: vertex {} added twice", v+1);
        },
        ReportCheck::NonAdjacent(a, b) => {
            println!("ERROR: vertices {} and {} are not adjacent", a+1, b+1);
        },
        ReportCheck::WrongTotalWeight { reported, actual } => {
            println!("ERROR: reported total weight {} (actual: {})", reported, actual);
        },
        ReportCheck::WrongNumberOfVertices { reported, actual } => {
            println!("ERROR: reported {} vertices (actual: {})", reported, actual);
        },
        ReportCheck::WrongVertexWeight(v) => {
            println!("ERROR: wrong weight for vertex {}", v+1);
        },
    };
    std::process::exit(1);
}
