/*
Implements procedures to write and read solution reports:

    Total Weight: <weight>
    Number of clique vertices: <k>
    Clique vertices: [<sorted 1-based ids>]
    Individual weights: [<weights, same order>]
*/
use std::fs;

use nom::IResult;
use nom::bytes::complete::tag;
use nom::character::complete::{char, digit1, space0};
use nom::combinator::{all_consuming, map_res, opt, recognize};
use nom::multi::separated_list0;
use nom::sequence::{delimited, pair, preceded, terminated, tuple};

use crate::clique::{checker, CheckerResult, VertexId, Weight, WeightedInstance};
use crate::error::{ExportError, InstanceReadError};
use crate::search::clique_bnb::CliqueSolution;
use crate::util::write_atomically;


/** content of a solution report (vertex ids are 0-based) */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportContent {
    /// reported total weight
    pub total_weight: Weight,
    /// reported number of vertices
    pub nb_vertices: usize,
    /// clique vertices (0-based)
    pub vertices: Vec<VertexId>,
    /// reported weight of each vertex
    pub weights: Vec<Weight>,
}

/// result of the verification of a report against an instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportCheck {
    /// the report is consistent, contains the clique weight
    Ok(Weight),
    /// a reported vertex does not exist in the instance
    UnknownVertex(VertexId),
    /// a vertex is reported twice
    VertexAddedTwice(VertexId),
    /// two reported vertices are not adjacent
    NonAdjacent(VertexId, VertexId),
    /// the reported total weight differs from the clique weight
    WrongTotalWeight {
        /// value in the report
        reported: Weight,
        /// actual weight
        actual: Weight,
    },
    /// the reported number of vertices differs from the clique size
    WrongNumberOfVertices {
        /// value in the report
        reported: usize,
        /// actual number of vertices
        actual: usize,
    },
    /// the reported weight of a vertex differs from the instance
    WrongVertexWeight(VertexId),
}

/// formats a list like [a, b, c]
fn format_list<T:ToString>(elements:impl Iterator<Item=T>) -> String {
    let items:Vec<String> = elements.map(|e| e.to_string()).collect();
    format!("[{}]", items.join(", "))
}

/** writes a string encoding the solution (use this to export the solution) */
pub fn report_to_string(inst:&dyn WeightedInstance, solution:&CliqueSolution) -> String {
    let mut vertices = solution.vertices.clone();
    vertices.sort_unstable();
    let mut res = String::default();
    res += format!("Total Weight: {}\n", solution.weight).as_str();
    res += format!("Number of clique vertices: {}\n", vertices.len()).as_str();
    res += format!("Clique vertices: {}\n", format_list(vertices.iter().map(|v| v+1))).as_str();
    res += format!("Individual weights: {}\n", format_list(vertices.iter().map(|v| inst.weight(*v)))).as_str();
    res
}

/** writes the solution report into a file. The file is either fully written or left untouched. */
pub fn write_report(inst:&dyn WeightedInstance, solution:&CliqueSolution, filename:&str) -> Result<(), ExportError> {
    write_atomically(filename, &report_to_string(inst, solution))
}

/// reads a (possibly negative) integer
fn read_integer(s:&str) -> IResult<&str, Weight> {
    map_res(recognize(pair(opt(char('-')), digit1)), |d:&str| d.parse::<Weight>())(s)
}

/// reads a list [a, b, c]
fn read_list(s:&str) -> IResult<&str, Vec<Weight>> {
    delimited(
        pair(char('['), space0),
        separated_list0(tuple((space0, char(','), space0)), read_integer),
        pair(space0, char(']'))
    )(s)
}

/// reads "<label><value>" with trailing spaces
fn read_labelled<'a, O>(
    label:&'static str,
    value:impl FnMut(&'a str) -> IResult<&'a str, O>,
) -> impl FnMut(&'a str) -> IResult<&'a str, O> {
    all_consuming(terminated(preceded(tag(label), value), space0))
}

/** reads a solution report */
pub fn read_report(s:&str) -> Result<ReportContent, InstanceReadError> {
    let mut lines = s.lines()
        .enumerate()
        .map(|(i,l)| (i+1, l.trim()))
        .filter(|(_,l)| !l.is_empty());
    let mut next_line = |expected:&'static str| match lines.next() {
        Some(l) => Ok(l),
        None => Err(InstanceReadError::MissingLine(expected)),
    };
    let parse_error = |i:usize, l:&str| InstanceReadError::Parse { line: i, content: l.to_string() };
    let (i,l) = next_line("Total Weight")?;
    let total_weight = read_labelled("Total Weight: ", read_integer)(l)
        .map_err(|_| parse_error(i,l))?.1;
    let (i,l) = next_line("Number of clique vertices")?;
    let nb_vertices = read_labelled("Number of clique vertices: ", read_integer)(l)
        .map_err(|_| parse_error(i,l))?.1;
    if nb_vertices < 0 { return Err(parse_error(i,l)); }
    let (ids_line,l) = next_line("Clique vertices")?;
    let ids = read_labelled("Clique vertices: ", read_list)(l)
        .map_err(|_| parse_error(ids_line,l))?.1;
    let (i,l) = next_line("Individual weights")?;
    let weights = read_labelled("Individual weights: ", read_list)(l)
        .map_err(|_| parse_error(i,l))?.1;
    let mut vertices = Vec::with_capacity(ids.len());
    for id in ids {
        if id < 1 { return Err(InstanceReadError::UnknownVertex { line: ids_line, vertex: 0 }); }
        vertices.push(id as usize - 1);
    }
    if weights.len() != vertices.len() {
        return Err(InstanceReadError::CountMismatch {
            what: "individual weights", expected: vertices.len(), found: weights.len()
        });
    }
    Ok(ReportContent { total_weight, nb_vertices: nb_vertices as usize, vertices, weights })
}

/** reads a solution report from a file */
pub fn read_report_file(filename:&str) -> Result<ReportContent, InstanceReadError> {
    let s = fs::read_to_string(filename)?;
    read_report(&s)
}

/** checks that a report describes a clique of the instance and that its numbers are consistent */
pub fn check_report(inst:&dyn WeightedInstance, report:&ReportContent) -> ReportCheck {
    let actual = match checker(inst, &report.vertices) {
        CheckerResult::Ok(w) => w,
        CheckerResult::UnknownVertex(v) => return ReportCheck::UnknownVertex(v),
        CheckerResult::VertexAddedTwice(v) => return ReportCheck::VertexAddedTwice(v),
        CheckerResult::NonAdjacent(u, v) => return ReportCheck::NonAdjacent(u, v),
    };
    if report.nb_vertices != report.vertices.len() {
        return ReportCheck::WrongNumberOfVertices { reported: report.nb_vertices, actual: report.vertices.len() };
    }
    for (v,w) in report.vertices.iter().zip(report.weights.iter()) {
        if inst.weight(*v) != *w { return ReportCheck::WrongVertexWeight(*v); }
    }
    if report.total_weight != actual {
        return ReportCheck::WrongTotalWeight { reported: report.total_weight, actual };
    }
    ReportCheck::Ok(actual)
}
