//! The C target.
//!
//! C has no closures to build combinator values from, so fragments are
//! nested statement blocks instead of expressions. A fragment operates
//! on three in-scope variables: the input string `s`, the current
//! offset `pos` and the success flag `ok`. On entry it runs only when
//! `ok` is set; on success it advances `pos` past what it matched, on
//! failure it clears `ok`. Blocks that need to backtrack save `pos` in
//! a local named with the fragment id, which keeps every local distinct
//! within the generated `match` function.

use super::Target;

pub(super) static TARGET: Target =
    Target { names: &["c"], symbol, or, concat, closure, epsilon: ";", program };

// Prefixes every line of a child fragment with `depth` tabs so the
// spliced block reads like hand-indented C.
fn indent(fragment: &str, depth: usize) -> String {
    let tabs = "\t".repeat(depth);
    fragment
        .lines()
        .map(|line| format!("{tabs}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn symbol(c: char) -> String {
    format!(
        "if (ok) {{\n\
         \tif (s[pos] == '{c}') {{\n\
         \t\tpos++;\n\
         \t}} else {{\n\
         \t\tok = 0;\n\
         \t}}\n\
         }}"
    )
}

fn or(id: u32, a: &str, b: &str) -> String {
    let a = indent(a, 1);
    let b = indent(b, 2);
    format!(
        "if (ok) {{\n\
         \tint save_{id} = pos;\n\
         {a}\n\
         \tif (!ok) {{\n\
         \t\tok = 1;\n\
         \t\tpos = save_{id};\n\
         {b}\n\
         \t}}\n\
         }}"
    )
}

fn concat(_id: u32, a: &str, b: &str) -> String {
    let a = indent(a, 1);
    let b = indent(b, 1);
    format!(
        "if (ok) {{\n\
         {a}\n\
         {b}\n\
         }}"
    )
}

fn closure(id: u32, a: &str, min: u32) -> String {
    let a = indent(a, 2);
    format!(
        "if (ok) {{\n\
         \tfor (int i_{id} = 0; ok && i_{id} < {min}; i_{id}++) {{\n\
         {a}\n\
         \t}}\n\
         \twhile (ok) {{\n\
         \t\tint save_{id} = pos;\n\
         {a}\n\
         \t\tif (ok && pos == save_{id}) {{\n\
         \t\t\tbreak;\n\
         \t\t}}\n\
         \t\tif (!ok) {{\n\
         \t\t\tok = 1;\n\
         \t\t\tpos = save_{id};\n\
         \t\t\tbreak;\n\
         \t\t}}\n\
         \t}}\n\
         }}"
    )
}

fn program(root: &str) -> String {
    PROGRAM.replace("«root»", &indent(root, 1))
}

const PROGRAM: &str = r#"#include <stdio.h>
#include <string.h>

/* Attempts a match at offset pos of s. Returns 1 and stores the match
 * length in *len on success, 0 otherwise. */
static int match(const char *s, int pos, int *len) {
	int ok = 1;
	int start = pos;

«root»

	if (ok) {
		*len = pos - start;
		return 1;
	}
	return 0;
}

int main(int argc, char **argv) {
	if (argc != 2) {
		fprintf(stderr, "must supply input string\n");
		return 1;
	}
	const char *input = argv[1];
	int len = (int)strlen(input);
	int first = 1;
	int n = 0;

	printf("[");
	for (int i = 0; i < len;) {
		if (match(input, i, &n) && n > 0) {
			printf("%s\"%.*s\"", first ? "" : ", ", n, input + i);
			first = 0;
			i += n;
		} else {
			i++;
		}
	}
	printf("]\n");
	return 0;
}
"#;
