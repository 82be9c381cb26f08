/*
Implements procedures to read and write weighted graph files:

    <n> <m>
    n <vertex> <weight>       (one line per vertex)
    e <vertex> <vertex>       (one line per edge)

WARNING: indices start at 1 in the file, at 0 in the instance.
Lines starting with 'c' are comments. A DIMACS header "p edge <n> <m>" is also accepted.
*/
use std::fs;

use bit_set::BitSet;
use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{char, digit1, space0, space1};
use nom::combinator::{all_consuming, map, map_res, opt, recognize};
use nom::sequence::{pair, preceded, separated_pair, terminated};

use crate::clique::{VertexId, Weight, WeightedInstance};
use crate::compact_instance::CompactInstance;
use crate::error::{ExportError, InstanceReadError};
use crate::util::write_atomically;


/// largest number of vertices accepted in a graph file (the instance stores an n x n bit matrix)
pub const MAX_VERTICES:usize = 1 << 15;

/// a non-comment line of a graph file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphLine {
    /// number of vertices, number of edges
    Header(usize, usize),
    /// 1-based vertex id, weight
    Vertex(usize, Weight),
    /// 1-based endpoints
    Edge(usize, usize),
}

/// reads an unsigned integer
fn read_usize(s:&str) -> IResult<&str, usize> {
    map_res(digit1, |d:&str| d.parse::<usize>())(s)
}

/// reads a (possibly negative) integer
fn read_weight(s:&str) -> IResult<&str, Weight> {
    map_res(recognize(pair(opt(char('-')), digit1)), |d:&str| d.parse::<Weight>())(s)
}

/// reads two numbers separated by spaces
fn read_two_integers(s:&str) -> IResult<&str, (usize,usize)> {
    separated_pair(read_usize, space1, read_usize)(s)
}

/// reads header containing (n,m)
pub fn read_header(s:&str) -> IResult<&str, (usize,usize)> {
    preceded(
        opt(alt((tag("p edge "), tag("p col ")))),
        read_two_integers
    )(s)
}

/// reads a vertex line "n <id> <weight>"
pub fn read_vertex(s:&str) -> IResult<&str, (usize,Weight)> {
    preceded(
        pair(char('n'), space1),
        separated_pair(read_usize, space1, read_weight)
    )(s)
}

/// reads edge line "e <id> <id>"
pub fn read_edge(s:&str) -> IResult<&str, (usize,usize)> {
    preceded(pair(char('e'), space1), read_two_integers)(s)
}

/// reads a whole (non-comment, non-empty) line
pub fn read_line(s:&str) -> IResult<&str, GraphLine> {
    all_consuming(terminated(
        alt((
            map(read_vertex, |(v,w)| GraphLine::Vertex(v,w)),
            map(read_edge, |(u,v)| GraphLine::Edge(u,v)),
            map(read_header, |(n,m)| GraphLine::Header(n,m)),
        )),
        space0
    ))(s)
}

/// true if the line should be ignored (empty or comment)
fn is_skipped(line:&str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('c')
}

/// converts a 1-based id into a 0-based one, checking that it is in [1,n]
fn to_vertex_id(id:usize, n:usize, line:usize) -> Result<VertexId, InstanceReadError> {
    if id == 0 || id > n {
        Err(InstanceReadError::UnknownVertex { line, vertex: id })
    } else {
        Ok(id - 1)
    }
}

/// reads an instance from a string
pub fn read_from_str(s:&str) -> Result<CompactInstance, InstanceReadError> {
    let mut lines = s.lines()
        .enumerate()
        .map(|(i,l)| (i+1, l.trim_end_matches('\r')))
        .filter(|(_,l)| !is_skipped(l));
    let parse_error = |i:usize, l:&str| InstanceReadError::Parse { line: i, content: l.to_string() };
    // header
    let (n, m) = match lines.next() {
        None => return Err(InstanceReadError::MissingHeader),
        Some((i,l)) => match read_line(l.trim_start()) {
            Ok((_, GraphLine::Header(n,m))) => (n,m),
            _ => return Err(parse_error(i,l)),
        }
    };
    if n > MAX_VERTICES {
        return Err(InstanceReadError::TooLarge { what: "vertices", value: n, max: MAX_VERTICES });
    }
    let max_edges = n * n.saturating_sub(1) / 2;
    if m > max_edges {
        return Err(InstanceReadError::TooLarge { what: "edges", value: m, max: max_edges });
    }
    let mut weights:Vec<Option<Weight>> = vec![None ; n];
    let mut adj:Vec<BitSet> = vec![BitSet::with_capacity(n) ; n];
    let mut edges:Vec<(VertexId,VertexId)> = Vec::new();
    for (i,l) in lines {
        match read_line(l.trim_start()) {
            Ok((_, GraphLine::Vertex(id, w))) => {
                let v = to_vertex_id(id, n, i)?;
                if weights[v].is_some() { return Err(InstanceReadError::DuplicateVertex(v)); }
                weights[v] = Some(w);
            },
            Ok((_, GraphLine::Edge(a, b))) => {
                let u = to_vertex_id(a, n, i)?;
                let v = to_vertex_id(b, n, i)?;
                if u != v && adj[u].contains(v) {
                    return Err(InstanceReadError::DuplicateEdge(u.min(v), u.max(v)));
                }
                adj[u].insert(v);
                adj[v].insert(u);
                edges.push((u,v));
            },
            _ => return Err(parse_error(i,l)),
        }
    }
    if edges.len() != m {
        return Err(InstanceReadError::CountMismatch { what: "edges", expected: m, found: edges.len() });
    }
    let mut res_weights = Vec::with_capacity(n);
    for (v,w) in weights.iter().enumerate() {
        match w {
            None => return Err(InstanceReadError::MissingVertex(v)),
            Some(w) => res_weights.push(*w),
        }
    }
    Ok(CompactInstance::from_edges(n, &edges, res_weights)?)
}

/// reads an instance from file
pub fn read_from_file(filename:&str) -> Result<CompactInstance, InstanceReadError> {
    let s = fs::read_to_string(filename)?;
    read_from_str(&s)
}

/** writes a string encoding the instance (use this to export the instance) */
pub fn instance_to_string(inst:&dyn WeightedInstance) -> String {
    let mut res = String::default();
    res += format!("{} {}\n", inst.nb_vertices(), inst.nb_edges()).as_str();
    for v in inst.vertices() {
        res += format!("n {} {}\n", v+1, inst.weight(v)).as_str();
    }
    for (u,v) in inst.edges() {
        res += format!("e {} {}\n", u+1, v+1).as_str();
    }
    res
}

/** writes the instance into a file. The file is either fully written or left untouched. */
pub fn write_instance(inst:&dyn WeightedInstance, filename:&str) -> Result<(), ExportError> {
    write_atomically(filename, &instance_to_string(inst))
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::InvalidGraphInput;
    use crate::generator::{generate, GeneratorParams};

    #[test]
    fn test_read_instance() {
        let inst = read_from_file("insts/triangle_tail.txt").unwrap();
        assert_eq!(inst.nb_vertices(), 4);
        assert_eq!(inst.nb_edges(), 4);
        assert_eq!(inst.weights(), &[10,20,30,5]);
        assert_eq!(inst.neighbors(2), &[0,1,3]);
    }

    #[test]
    fn test_read_header() {
        let s = "4 5\nn 1 2";
        assert_eq!(read_header(s).unwrap().0, "\nn 1 2");
        assert_eq!(read_header(s).unwrap().1, (4,5));
        assert_eq!(read_header("p edge 2 1").unwrap().1, (2,1));
    }

    #[test]
    fn test_read_vertex() {
        assert_eq!(read_vertex("n 3 120").unwrap().1, (3,120));
        assert_eq!(read_vertex("n 3 -2").unwrap().1, (3,-2));
        assert!(read_vertex("e 3 4").is_err());
    }

    #[test]
    fn test_read_edge() {
        let s = "e 1 2\n";
        assert_eq!(read_edge(s).unwrap().1, (1,2));
        assert_eq!(read_edge(s).unwrap().0, "\n");
    }

    #[test]
    fn test_read_line() {
        assert_eq!(read_line("e 1  2 ").unwrap().1, GraphLine::Edge(1,2));
        assert_eq!(read_line("n 7 1").unwrap().1, GraphLine::Vertex(7,1));
        assert_eq!(read_line("10 0").unwrap().1, GraphLine::Header(10,0));
        assert!(read_line("e 1 2 3").is_err());
        assert!(read_line("x 1 2").is_err());
    }

    #[test]
    fn test_comments_and_crlf() {
        let s = "c generated\r\n2 1\r\nn 1 4\r\n\r\nn 2 6\r\nc edge list\r\ne 2 1\r\n";
        let inst = read_from_str(s).unwrap();
        assert_eq!(inst.weights(), &[4,6]);
        assert_eq!(inst.edges(), &[(0,1)]);
    }

    #[test]
    fn test_read_errors() {
        assert!(matches!(read_from_str(""), Err(InstanceReadError::MissingHeader)));
        assert!(matches!(
            read_from_str("2 1\nn 1 1\nn 2 1\n"),
            Err(InstanceReadError::CountMismatch { what: "edges", expected: 1, found: 0 })
        ));
        assert!(matches!(
            read_from_str("2 0\nn 1 1\n"),
            Err(InstanceReadError::MissingVertex(1))
        ));
        assert!(matches!(
            read_from_str("2 0\nn 1 1\nn 1 2\n"),
            Err(InstanceReadError::DuplicateVertex(0))
        ));
        assert!(matches!(
            read_from_str("2 1\nn 1 1\nn 2 1\ne 1 3\n"),
            Err(InstanceReadError::UnknownVertex { line: 4, vertex: 3 })
        ));
        assert!(matches!(
            read_from_str("2 2\nn 1 1\nn 2 1\ne 1 2\ne 2 1\n"),
            Err(InstanceReadError::DuplicateEdge(0,1))
        ));
        assert!(matches!(
            read_from_str("2 0\nn 1 1\nn 2 0\n"),
            Err(InstanceReadError::Invalid(_))
        ));
        assert!(matches!(
            read_from_str("2 0\nn 1 1\nn two 1\n"),
            Err(InstanceReadError::Parse { line: 3, .. })
        ));
    }

    #[test]
    fn test_oversized_header() {
        assert!(matches!(
            read_from_str("1 18446744073709551615\nn 1 1\n"),
            Err(InstanceReadError::TooLarge { what: "edges", max: 0, .. })
        ));
        assert!(matches!(
            read_from_str("3 4\nn 1 1\nn 2 1\nn 3 1\n"),
            Err(InstanceReadError::TooLarge { what: "edges", value: 4, max: 3 })
        ));
        assert!(matches!(
            read_from_str("18446744073709551615 0\n"),
            Err(InstanceReadError::TooLarge { what: "vertices", .. })
        ));
        assert!(matches!(
            read_from_str("99999999999999999999999 0\n"),
            Err(InstanceReadError::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn test_overflowing_weights() {
        let s = "2 1\nn 1 9223372036854775807\nn 2 9223372036854775807\ne 1 2\n";
        assert!(matches!(
            read_from_str(s),
            Err(InstanceReadError::Invalid(InvalidGraphInput::WeightOverflow))
        ));
    }

    #[test]
    fn test_round_trip() {
        for seed in 0..5 {
            let params = GeneratorParams { nb_vertices: 30, seed, ..GeneratorParams::default() };
            let inst = generate(&params).unwrap();
            let s = instance_to_string(&inst);
            let inst2 = read_from_str(&s).unwrap();
            assert_eq!(inst, inst2);
        }
    }

    #[test]
    fn test_written_format() {
        let inst = CompactInstance::from_edges(3, &[(2,0),(0,1)], vec![5,6,7]).unwrap();
        assert_eq!(instance_to_string(&inst), "3 2\nn 1 5\nn 2 6\nn 3 7\ne 1 2\ne 1 3\n");
    }
}
