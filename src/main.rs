//! MWCP instance generator: generates a random weighted graph, solves it exactly,
//! and exports the graph and its optimal solution (ground truth).

use std::error::Error;
use std::rc::Rc;

use clap::{App, ArgMatches, load_yaml};
use serde_json::json;

use dogs_mwcp::clique::{checker, CheckerResult, Weight, WeightedInstance};
use dogs_mwcp::dimacs::instance_to_string;
use dogs_mwcp::generator::{generate, GeneratorParams};
use dogs_mwcp::report::report_to_string;
use dogs_mwcp::search::clique_bnb::{CliqueBnb, SearchStatus};
use dogs_mwcp::search::stopping::{NeverStoppingCriterion, TimeStoppingCriterion};
use dogs_mwcp::util::{export_stats, parse_arg, parse_time_limit, write_files_atomically};


/// reads the generator parameters (defaults are the ones of the argument file)
fn read_generator_params(main_args:&ArgMatches) -> Result<GeneratorParams, String> {
    let default = GeneratorParams::default();
    Ok(GeneratorParams {
        nb_vertices: parse_arg(main_args, "nodes")?.unwrap_or(default.nb_vertices),
        edge_probability: parse_arg(main_args, "probability")?.unwrap_or(default.edge_probability),
        seed: parse_arg(main_args, "seed")?.unwrap_or(default.seed),
        min_weight: parse_arg(main_args, "min-weight")?.unwrap_or(default.min_weight),
        max_weight: parse_arg(main_args, "max-weight")?.unwrap_or(default.max_weight),
    })
}

/// generates, solves, and exports an instance
fn run(main_args:&ArgMatches) -> Result<(), Box<dyn Error>> {
    // validate everything before any computation
    let params = read_generator_params(main_args)?;
    params.validate()?;
    let time_limit = parse_time_limit(main_args, "time")?;
    let inst_file = main_args.value_of("output").unwrap_or("test_instance.txt");
    let sol_file = main_args.value_of("solution").unwrap_or("solution.txt");
    let perf_file = main_args.value_of("perf");
    let export = !main_args.is_present("no-export");

    // generate the instance
    println!("=========================================================");
    let instance:Rc<dyn WeightedInstance> = Rc::new(generate(&params)?);
    println!(
        "generated graph: {} vertices, {} edges (p={}, seed={}).",
        instance.nb_vertices(), instance.nb_edges(), params.edge_probability, params.seed
    );
    instance.display_statistics();
    println!("computing the exact solution (this may take a while on large graphs)...");

    // solve it
    let bnb = CliqueBnb::new(instance.clone())?;
    let (solution, stats) = match time_limit {
        None => bnb.run(NeverStoppingCriterion::default()),
        Some(t) => {
            println!("time limit: {}", t);
            bnb.run(TimeStoppingCriterion::new(t))
        }
    };
    println!(
        "branch & bound took {:.3} seconds. nodes: {}, pruned: {}, improvements: {}",
        stats.time_searched, stats.nb_nodes, stats.nb_pruned, stats.nb_improvements
    );
    match checker(instance.as_ref(), &solution.vertices) {
        CheckerResult::Ok(w) if w == solution.weight => {},
        res => return Err(format!("invalid solution (reason: {:?})", res).into()),
    }

    // display results
    let ids:Vec<usize> = solution.vertices.iter().map(|v| v+1).collect();
    let weights:Vec<Weight> = solution.vertices.iter().map(|v| instance.weight(*v)).collect();
    println!("{}", "-".repeat(50));
    match solution.status {
        SearchStatus::Optimal => println!("OPTIMAL SOLUTION (ground truth):"),
        SearchStatus::Feasible => println!("BEST SOLUTION FOUND (time limit reached, optimality not proven):"),
    }
    println!("Total Weight: {}", solution.weight);
    println!("Clique vertices: {:?}", ids);
    println!("Individual weights: {:?}", weights);
    println!("{}", "-".repeat(50));

    // export files
    if export {
        let inst_content = instance_to_string(instance.as_ref());
        let sol_content = report_to_string(instance.as_ref(), &solution);
        write_files_atomically(&[(inst_file, inst_content.as_str()), (sol_file, sol_content.as_str())])?;
        println!("graph exported to: {}", inst_file);
        println!("solution exported to: {}", sol_file);
    }
    let perf = json!({
        "inst_name": inst_file,
        "nb_vertices": params.nb_vertices,
        "edge_probability": params.edge_probability,
        "seed": params.seed,
        "nb_edges": instance.nb_edges(),
        "weight": solution.weight,
        "clique": ids,
        "optimal": solution.is_optimal(),
        "time_searched": stats.time_searched,
        "stats": stats,
    });
    export_stats(&perf, perf_file)?;
    Ok(())
}


/**
reads the parameters, generates an instance, solves it, and exports it.
exits with status 1 (and a message on the error stream) if anything fails.
*/
pub fn main() {
    // parse arguments
    let yaml = load_yaml!("main_args.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    if let Err(e) = run(&main_args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
