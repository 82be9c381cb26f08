use std::error::Error;
use std::rc::Rc;

use clap::{App, ArgMatches, load_yaml};
use serde_json::json;

use dogs_mwcp::clique::{checker, CheckerResult, WeightedInstance};
use dogs_mwcp::compact_instance::CompactInstance;
use dogs_mwcp::report::{report_to_string, write_report};
use dogs_mwcp::search::bounds::Bound;
use dogs_mwcp::search::clique_bnb::CliqueBnb;
use dogs_mwcp::search::stopping::{NeverStoppingCriterion, TimeStoppingCriterion};
use dogs_mwcp::util::{export_stats, parse_time_limit};


/// reads an instance, solves it, and exports the report and statistics
fn run(main_args:&ArgMatches) -> Result<(), Box<dyn Error>> {
    let inst_filename = main_args.value_of("instance").unwrap_or_default();
    let time_limit = parse_time_limit(main_args, "time")?;
    let bound = match main_args.value_of("bound") {
        Some("sum") => Bound::WeightSum,
        _ => Bound::Coloring,
    };
    let sol_file = main_args.value_of("solution");
    let perf_file = main_args.value_of("perf");
    if let Some(e) = sol_file { println!("printing solutions in: {}", e); }
    if let Some(e) = perf_file { println!("printing perfs in: {}\n", e); }
    // read instance file
    println!("reading instance: {}...", inst_filename);
    let instance:Rc<dyn WeightedInstance> = Rc::new(CompactInstance::from_file(inst_filename)?);
    instance.display_statistics();
    println!("=======================");

    // solve it
    let bnb = CliqueBnb::new(instance.clone())?
        .with_bound(bound)
        .with_greedy_seed(!main_args.is_present("no-greedy"));
    let (solution, stats) = match time_limit {
        None => bnb.run(NeverStoppingCriterion::default()),
        Some(t) => bnb.run(TimeStoppingCriterion::new(t)),
    };
    println!(
        "branch & bound took {:.3} seconds. weight: {} ({:?}), nodes: {}",
        stats.time_searched, solution.weight, solution.status, stats.nb_nodes
    );
    match checker(instance.as_ref(), &solution.vertices) {
        CheckerResult::Ok(w) if w == solution.weight => {},
        res => return Err(format!("invalid solution (reason: {:?})", res).into()),
    }
    print!("{}", report_to_string(instance.as_ref(), &solution));

    // export results
    if let Some(filename) = sol_file {
        write_report(instance.as_ref(), &solution, filename)?;
    }
    let perf = json!({
        "inst_name": inst_filename,
        "primal_list": vec![solution.weight],
        "optimal": solution.is_optimal(),
        "time_searched": stats.time_searched,
        "stats": stats,
    });
    export_stats(&perf, perf_file)?;
    Ok(())
}


/** solves a Maximum Weight Clique instance using the branch & bound */
pub fn main() {
    // parse arguments
    let yaml = load_yaml!("mwcp_solve.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    if let Err(e) = run(&main_args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
