use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;

use pretty_assertions::assert_eq;
use rxc_parser::ast::{self, Node};
use rxc_parser::{rpn_convert, sieve};

use crate::{compile, find_target, Error};

/// Compiles the regex in each `testdata/*.in` file and compares the
/// generated program against the `.out` goldenfile. The first line of
/// an `.in` file names the target, the second is the regex (absent for
/// the empty regex).
#[test]
fn emitted_programs() {
    let mut mint = goldenfile::Mint::new(".");

    for entry in globwalk::glob("src/tests/testdata/*.in").unwrap().flatten() {
        let in_path = entry.into_path();
        let out_path = in_path.with_extension("out");

        let input = fs::read_to_string(&in_path).expect("unable to read");
        let mut lines = input.lines();
        let target = find_target(lines.next().expect("missing target")).unwrap();
        let regex = lines.next().unwrap_or_default();

        let code = compile(regex, target).unwrap();

        let mut output_file = mint.new_goldenfile(out_path).unwrap();
        output_file.write_all(code.as_bytes()).unwrap();
    }
}

#[test]
fn emission_is_deterministic() {
    for name in ["golang", "c", "python3"] {
        let target = find_target(name).unwrap();
        for regex in ["", "a", "a(b|c)*d", "(andrew)|(jackson)", "x+|y*"] {
            assert_eq!(
                compile(regex, target).unwrap(),
                compile(regex, target).unwrap(),
                "target {name}, regex {regex:?}"
            );
        }
    }
}

#[test]
fn go_fragments_read_like_the_regex() {
    let target = find_target("golang").unwrap();
    let code = compile("a(b|c)*d", target).unwrap();
    assert!(code.contains(
        "match := concat(concat(char('a'), \
         closure(or(char('b'), char('c')), 0)), char('d'))"
    ));
}

#[test]
fn python_fragments_are_parenthesized() {
    let target = find_target("python3").unwrap();
    let code = compile("a(b|c)*d", target).unwrap();
    assert!(code.contains(
        "exprmatcher = ((Char('a') + ((Char('b') | Char('c')) ** 0)) + Char('d'))"
    ));
    // nested closures keep their own parentheses
    let code = compile("(a*)+", target).unwrap();
    assert!(code.contains("exprmatcher = ((Char('a') ** 0) ** 1)"));
}

#[test]
fn empty_regex_compiles_to_the_epsilon_matcher() {
    assert!(compile("", find_target("golang").unwrap())
        .unwrap()
        .contains("match := epsilon()"));
    assert!(compile("", find_target("python3").unwrap())
        .unwrap()
        .contains("exprmatcher = Epsilon()"));
    assert!(compile("()", find_target("golang").unwrap())
        .unwrap()
        .contains("match := epsilon()"));
}

#[test]
fn errors_identify_the_failing_stage() {
    let target = find_target("golang").unwrap();

    assert_eq!(
        compile("a?b", target),
        Err(Error::Sieve(rxc_parser::Error::Lexical('?')))
    );
    assert_eq!(
        compile("(a", target),
        Err(Error::Sieve(rxc_parser::Error::UnbalancedParens(
            "bracket not closed"
        )))
    );
    assert_eq!(
        compile("a|", target),
        Err(Error::Rpn(rxc_parser::Error::Parse {
            message: "empty union operand".to_string(),
            partial: "a".to_string(),
        }))
    );
}

// Reference interpretation of the matching contract that every emitted
// runtime implements: a symbol consumes one position, alternation tries
// its first branch first, concatenation sums the lengths of both
// children, and a closure matches its minimum and then greedily until
// the first non-match or a zero-width occurrence.
fn match_len(node: &Node, input: &[char]) -> Option<usize> {
    match node {
        Node::Sym(c) => input.first().filter(|&x| x == c).map(|_| 1),
        Node::Or(a, b) => {
            match_len(a, input).or_else(|| match_len(b, input))
        }
        Node::Concat(a, b) => {
            let n = match_len(a, input)?;
            let m = match_len(b, &input[n..])?;
            Some(n + m)
        }
        Node::Closure(a, min) => {
            let mut total = 0;
            for _ in 0..*min {
                total += match_len(a, &input[total..])?;
            }
            loop {
                match match_len(a, &input[total..]) {
                    Some(n) if n > 0 => total += n,
                    _ => return Some(total),
                }
            }
        }
    }
}

// Scans `input` for non-overlapping leftmost matches of `regex`. A
// successful zero-length match is not recorded and the scanner still
// advances by one.
fn matches(regex: &str, input: &str) -> Vec<String> {
    let postfix = rpn_convert(&sieve(regex).unwrap()).unwrap();
    let root = ast::build(&postfix).unwrap();
    let chars: Vec<char> = input.chars().collect();
    let mut found = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        match root.as_ref().and_then(|node| match_len(node, &chars[i..])) {
            Some(n) if n > 0 => {
                found.push(chars[i..i + n].iter().collect());
                i += n;
            }
            _ => i += 1,
        }
    }
    found
}

#[test]
fn match_scenarios() {
    assert_eq!(matches("a(b|c)*d", "abcbcd"), vec!["abcbcd"]);
    assert_eq!(matches("ab|cd", "abxycd"), vec!["ab", "cd"]);
    assert_eq!(
        matches("(andrew)|(jackson)", "see jackson and andrew"),
        vec!["jackson", "andrew"]
    );
    assert_eq!(matches("a+", "baaabba"), vec!["aaa", "a"]);
    assert_eq!(matches("a(b|c)*d", "ad"), vec!["ad"]);
    assert_eq!(matches("xy", "xxy"), vec!["xy"]);
}

#[test]
fn match_boundary_cases() {
    // the empty regex matches only the empty string, which is never
    // recorded
    assert_eq!(matches("", "abc"), Vec::<String>::new());
    assert_eq!(matches("a", "aaa"), vec!["a", "a", "a"]);
    // zero-length closure successes are not recorded either
    assert_eq!(matches("a*", "bbb"), Vec::<String>::new());
    assert_eq!(matches("a*", "baa"), vec!["aa"]);
    // nested closures terminate on zero-width occurrences
    assert_eq!(matches("(a*)*", "bab"), vec!["a"]);
}

// Extracts the recorded matches from a generated program's output by
// taking the text between quote characters. All match lists are printed
// quoted (Go `%q`, Python repr, the C JSON-ish list) and the matches
// themselves never contain quotes, so this is unambiguous.
fn quoted(output: &str, quote: char) -> Vec<String> {
    output.split(quote).skip(1).step_by(2).map(String::from).collect()
}

fn run(command: &mut Command) -> String {
    let output = command.output().unwrap_or_else(|err| {
        panic!("cannot run {:?}: {}", command.get_program(), err)
    });
    assert!(
        output.status.success(),
        "{:?} failed: {}",
        command.get_program(),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

fn emit_to(dir: &Path, name: &str, target: &str, regex: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    let code = compile(regex, find_target(target).unwrap()).unwrap();
    fs::write(&path, code).unwrap();
    path
}

fn go_matches(dir: &Path, regex: &str, input: &str) -> Vec<String> {
    let src = emit_to(dir, "matcher.go", "golang", regex);
    quoted(&run(Command::new("go").arg("run").arg(src).arg(input)), '"')
}

fn c_matches(dir: &Path, regex: &str, input: &str) -> Vec<String> {
    let src = emit_to(dir, "matcher.c", "c", regex);
    let bin = dir.join("matcher");
    run(Command::new("cc").arg(&src).arg("-o").arg(&bin));
    quoted(&run(Command::new(&bin).arg(input)), '"')
}

fn python_matches(dir: &Path, regex: &str, input: &str) -> Vec<String> {
    let src = emit_to(dir, "matcher.py", "python3", regex);
    quoted(&run(Command::new("python3").arg(src).arg(input)), '\'')
}

/// Semantic round-trip: for every pair of targets the generated
/// programs report the same match list, which also agrees with the
/// reference interpretation above. Compiles and runs the generated
/// programs, so it needs the target toolchains on PATH.
#[test]
#[ignore = "requires go, cc and python3 on PATH"]
fn generated_programs_agree_across_targets() {
    let scenarios = [
        ("a(b|c)*d", "abcbcd"),
        ("ab|cd", "abxycd"),
        ("(andrew)|(jackson)", "see jackson and andrew"),
        ("a+", "baaabba"),
        ("a(b|c)*d", "ad"),
        ("xy", "xxy"),
        ("a", "aaa"),
        ("a*", "bbb"),
        ("a*", "baa"),
        ("", "abc"),
    ];

    let dir = std::env::temp_dir().join("rxc_roundtrip");
    fs::create_dir_all(&dir).unwrap();

    for (regex, input) in scenarios {
        let expected = matches(regex, input);
        assert_eq!(
            go_matches(&dir, regex, input),
            expected,
            "go, regex {regex:?} on {input:?}"
        );
        assert_eq!(
            c_matches(&dir, regex, input),
            expected,
            "c, regex {regex:?} on {input:?}"
        );
        assert_eq!(
            python_matches(&dir, regex, input),
            expected,
            "python3, regex {regex:?} on {input:?}"
        );
    }
}

#[test]
fn error_messages_chain_stage_and_cause() {
    let target = find_target("golang").unwrap();
    let err = compile("a?b", target).unwrap_err();
    assert_eq!(err.to_string(), "cannot sieve");
    let source = std::error::Error::source(&err).unwrap();
    assert_eq!(source.to_string(), "'?' is not an allowed symbol");
}
