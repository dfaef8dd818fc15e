#![deny(warnings)]

use crate::scanner::Scanner;

/*
 * The caller of these function is expected to setup the scanner for a
 * clear start, ie: call scanner.ignore() to start fresh
 */

static WHITE: &[char] = &[' ', '\t'];
static NUMERIC: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.'];
static MATH_OPS: &[char] = &['+', '-', '*', '/', '(', ')'];

// discard spaces and tabs, returns whether anything was skipped
pub fn skip_whitespace<I: Iterator<Item=char>>(scanner: &mut Scanner<I>) -> bool {
    let skipped = scanner.skip_all(WHITE);
    scanner.ignore();
    skipped
}

// scan a maximal run of [0-9.], shape is checked when the literal is parsed
pub fn scan_number<I: Iterator<Item=char>>(scanner: &mut Scanner<I>) -> Option<String> {
    if !scanner.skip_all(NUMERIC) {
        return None;
    }
    Some(scanner.extract_string())
}

pub fn scan_math_op<I: Iterator<Item=char>>(scanner: &mut Scanner<I>) -> Option<char> {
    let op = scanner.accept_any(MATH_OPS)?;
    scanner.ignore();
    Some(op)
}

///////////////////////////////////////////////////////////////////////////////
