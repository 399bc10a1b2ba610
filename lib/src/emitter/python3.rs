//! The Python 3 target.
//!
//! Fragments are expressions over matcher classes with operator sugar:
//! `|` builds an alternation, `+` a concatenation and `**` a closure
//! with its minimum. Every composite fragment is parenthesized so that
//! nested closures such as `(a*)+` associate correctly.

use super::Target;

pub(super) static TARGET: Target = Target {
    names: &["python3"],
    symbol,
    or,
    concat,
    closure,
    epsilon: "Epsilon()",
    program,
};

fn symbol(c: char) -> String {
    format!("Char('{c}')")
}

fn or(_id: u32, a: &str, b: &str) -> String {
    format!("({a} | {b})")
}

fn concat(_id: u32, a: &str, b: &str) -> String {
    format!("({a} + {b})")
}

fn closure(_id: u32, a: &str, min: u32) -> String {
    format!("({a} ** {min})")
}

fn program(root: &str) -> String {
    PROGRAM.replace("«root»", root)
}

const PROGRAM: &str = r#"import sys


class Matcher:
    """A matcher reports whether its expression matches a prefix of the
    input, and the length of the match."""

    def match(self, s):
        raise NotImplementedError

    def __or__(self, other):
        return Or(self, other)

    def __add__(self, other):
        return Concat(self, other)

    def __pow__(self, min):
        return Closure(self, min)


class Char(Matcher):
    def __init__(self, c):
        self.c = c

    def match(self, s):
        if len(s) == 0:
            return False, 0
        return s[0] == self.c, 1


class Epsilon(Matcher):
    def match(self, s):
        return True, 0


class Or(Matcher):
    def __init__(self, a, b):
        self.am, self.bm = a.match, b.match

    def match(self, s):
        ok, n = self.am(s)
        if ok:
            return True, n
        return self.bm(s)


class Concat(Matcher):
    def __init__(self, a, b):
        self.am, self.bm = a.match, b.match

    def match(self, s):
        ok, n = self.am(s)
        if not ok:
            return False, 0
        ok, m = self.bm(s[n:])
        return ok, n + m


class Closure(Matcher):
    """Matches min or more occurrences, greedily. The greedy phase stops
    at the first non-match or at an occurrence that consumes nothing."""

    def __init__(self, a, min):
        self.am = a.match
        self.min = min

    def match(self, s):
        n = 0
        count = 0
        while count < self.min:
            ok, m = self.am(s[n:])
            if not ok:
                return False, 0
            n += m
            count += 1
        while True:
            ok, m = self.am(s[n:])
            if not ok or m == 0:
                return True, n
            n += m


if len(sys.argv) != 2:
    print("must supply input string")
    sys.exit(1)

inputstr = sys.argv[1]

exprmatcher = «root»

matches = []

i = 0
while i < len(inputstr):
    ok, n = exprmatcher.match(inputstr[i:])
    if ok and n > 0:
        matches.append(inputstr[i:i + n])
        i += n
    else:
        i += 1

print(matches)
"#;
