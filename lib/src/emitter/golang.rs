//! The Go target.
//!
//! Fragments are expressions over the combinator functions defined in
//! the program skeleton, so the root fragment reads like the regex it
//! was compiled from: `concat(char('a'), closure(char('b'), 0))`.

use super::Target;

pub(super) static TARGET: Target =
    Target { names: &["golang", "go"], symbol, or, concat, closure, epsilon: "epsilon()", program };

fn symbol(c: char) -> String {
    format!("char('{c}')")
}

fn or(_id: u32, a: &str, b: &str) -> String {
    format!("or({a}, {b})")
}

fn concat(_id: u32, a: &str, b: &str) -> String {
    format!("concat({a}, {b})")
}

fn closure(_id: u32, a: &str, min: u32) -> String {
    format!("closure({a}, {min})")
}

fn program(root: &str) -> String {
    PROGRAM.replace("«root»", root)
}

const PROGRAM: &str = r#"package main

import (
	"fmt"
	"log"
	"os"
)

// A matcher reports whether its expression matches a prefix of the
// input, and the length of the match.
type matcher func([]rune) (bool, int)

// char returns a matcher for a single rune.
func char(c rune) matcher {
	return func(input []rune) (bool, int) {
		if len(input) > 0 && input[0] == c {
			return true, 1
		}
		return false, 0
	}
}

// epsilon returns a matcher for the empty expression.
func epsilon() matcher {
	return func(input []rune) (bool, int) {
		return true, 0
	}
}

// or returns a matcher that tries a first and falls back to b.
func or(a, b matcher) matcher {
	return func(input []rune) (bool, int) {
		if ok, n := a(input); ok {
			return true, n
		}
		return b(input)
	}
}

// concat returns a matcher for a followed by b.
func concat(a, b matcher) matcher {
	return func(input []rune) (bool, int) {
		if ok, n := a(input); ok {
			if ok, m := b(input[n:]); ok {
				return true, n + m
			}
		}
		return false, 0
	}
}

// closure returns a matcher for min or more occurrences of m. After the
// mandatory occurrences it matches greedily, stopping at the first
// non-match or at an occurrence that consumes nothing.
func closure(m matcher, min int) matcher {
	return func(input []rune) (bool, int) {
		total := 0
		for i := 0; i < min; i++ {
			ok, n := m(input[total:])
			if !ok {
				return false, 0
			}
			total += n
		}
		for {
			ok, n := m(input[total:])
			if !ok || n == 0 {
				return true, total
			}
			total += n
		}
	}
}

func main() {
	if len(os.Args) != 2 {
		log.Fatalln("must supply input string")
	}
	input := []rune(os.Args[1])

	match := «root»

	matches := []string{}
	for i := 0; i < len(input); {
		if ok, n := match(input[i:]); ok && n > 0 {
			matches = append(matches, string(input[i:i+n]))
			i += n
			continue
		}
		i++
	}

	fmt.Printf("matches: %q\n", matches)
}
"#;
