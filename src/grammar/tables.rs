//! Parse tables for the teaching language, emitted by the offline table
//! generator. Regenerate rather than edit by hand.

use crate::parsers::compressed::CompressedTable;
use crate::parsers::table::Rule;

/// State entered after shifting end of input from the program state
const FINAL_STATE: usize = 3;

/// Number of terminals, including end of input, error and invalid token
const NUM_TERMINALS: usize = 47;

/// Marks a state whose only action is its default reduction
const BASE_DEFAULT: i16 = -39;

/// Marks an explicit error in `ENTRIES`
const ENTRY_ERROR: i16 = -1;

/// Offset into `ENTRIES` of each state's terminal row
const BASE: [i16; 179] = [
    -39, 24, 116, -39, -10, -39, -39, -39, -39, -39,
    -15, 116, -5, 28, 43, 53, 88, 91, 67, 67,
    -39, 67, -39, -39, 93, -39, -39, -39, -39, -39,
    -39, -39, 284, 64, 66, 67, 67, 67, 67, 65,
    67, 97, 67, 69, 67, -39, -39, -39, -6, -39,
    141, 49, 344, 26, 42, -39, 67, 67, 67, 67,
    67, 67, 67, 67, 67, 67, 67, 67, 67, -39,
    -39, -39, 299, 314, 329, 246, 67, 162, 62, 183,
    72, 108, 76, 78, -39, 204, -39, -39, -39, -39,
    67, 112, 44, -39, 93, 381, 381, 106, 106, 106,
    106, 370, 357, -2, -2, -39, -39, -39, -39, -39,
    -39, -39, 265, 116, 67, 116, 67, 79, 67, 69,
    75, 344, 86, 67, 128, -39, -39, 131, 225, -39,
    344, 67, 109, 344, -39, -39, -39, 344, 110, 116,
    113, 344, 19, -9, -39, -39, -39, -4, 143, 148,
    111, 115, -39, 84, 132, -39, -39, -39, -39, 67,
    67, 67, -39, -39, 116, 19, 133, 134, -39, 344,
    344, 344, -39, -39, -39, -39, 116, 116, 116,
];

/// Default reduction of each state, 0 if the default is an error
const DEFAULT_REDUCTIONS: [u16; 179] = [
    3, 0, 2, 1, 86, 87, 15, 16, 17, 18,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    3, 0, 4, 5, 0, 6, 7, 8, 9, 10,
    11, 12, 0, 80, 81, 0, 0, 0, 0, 84,
    0, 0, 0, 32, 0, 13, 82, 83, 86, 78,
    0, 0, 79, 21, 0, 19, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 64,
    62, 63, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 33, 34, 0, 80, 81, 85, 58,
    0, 0, 23, 14, 0, 70, 71, 74, 75, 72,
    73, 76, 77, 65, 66, 67, 68, 69, 60, 61,
    59, 88, 0, 0, 0, 0, 0, 38, 39, 0,
    0, 22, 0, 0, 0, 20, 89, 27, 0, 30,
    36, 0, 0, 40, 35, 53, 25, 24, 0, 0,
    0, 37, 41, 0, 26, 28, 29, 0, 0, 0,
    0, 42, 43, 0, 0, 52, 54, 45, 46, 0,
    0, 0, 47, 48, 0, 0, 0, 0, 3, 49,
    50, 51, 31, 44, 3, 3, 57, 56, 55,
];

/// Offset into `ENTRIES` of each nonterminal's goto column
const GOTO_BASE: [i16; 27] = [
    -39, -39, -20, -8, -39, -38, -39, 82, -39, -39,
    -39, -39, -39, -39, -39, 39, -39, -39, -39, 15,
    -39, -39, -39, -39, -39, -17, -39,
];

/// Goto state used when a nonterminal's column has no entry
const DEFAULT_GOTOS: [u16; 27] = [
    0, 1, 2, 22, 23, 24, 54, 55, 92, 25,
    26, 27, 28, 82, 83, 84, 132, 150, 151, 152,
    29, 143, 156, 30, 31, 32, 39,
];

/// Shift targets and goto states, addressed through `BASE` and `GOTO_BASE`
const ENTRIES: [i16; 416] = [
    51, 49, 50, 41, 52, 81, 153, 154, 33, 34,
    35, 36, 86, 87, 157, 158, 159, 160, 72, 73,
    74, 75, 147, 77, 3, 79, 40, 85, 37, 38,
    66, 67, 68, 38, 161, 155, 42, 148, 149, 95,
    96, 97, 98, 99, 100, 101, 102, 103, 104, 105,
    106, 107, 4, 5, 6, 7, 8, 9, 10, 112,
    11, 12, 13, 14, 90, 91, 15, 16, 17, 43,
    48, 5, 80, 121, 6, 7, 8, 9, 93, 94,
    18, 81, 123, 124, 44, 16, 17, 166, 167, 45,
    19, 46, 20, 89, 47, 21, 53, 128, 18, 130,
    70, 133, 71, 114, 76, 127, 137, 129, 19, 78,
    116, 117, 118, 21, 141, 119, 122, 131, 135, 4,
    5, 6, 7, 8, 9, 10, 136, 11, 12, 13,
    14, 145, 138, 15, 16, 17, 64, 65, 66, 67,
    68, 139, 169, 170, 171, 142, 162, 18, 176, 146,
    144, 163, 165, 164, 177, 178, 172, 19, 134, 20,
    0, 0, 21, 56, 57, 58, 59, 60, 61, 62,
    63, 64, 65, 66, 67, 68, 125, 168, 174, 175,
    173, 0, 0, 88, 56, 57, 58, 59, 60, 61,
    62, 63, 64, 65, 66, 67, 68, 0, 0, 0,
    0, 0, 0, 0, 113, 56, 57, 58, 59, 60,
    61, 62, 63, 64, 65, 66, 67, 68, 0, 0,
    0, 0, 0, 0, 0, 115, 56, 57, 58, 59,
    60, 61, 62, 63, 64, 65, 66, 67, 68, 0,
    0, 0, 0, 0, 0, 0, 120, 56, 57, 58,
    59, 60, 61, 62, 63, 64, 65, 66, 67, 68,
    0, 0, 0, 0, 0, 0, 0, 140, 56, 57,
    58, 59, 60, 61, 62, 63, 64, 65, 66, 67,
    68, 0, 0, 0, 0, 0, 111, 56, 57, 58,
    59, 60, 61, 62, 63, 64, 65, 66, 67, 68,
    0, 0, 0, 0, 0, 126, 56, 57, 58, 59,
    60, 61, 62, 63, 64, 65, 66, 67, 68, 0,
    69, 56, 57, 58, 59, 60, 61, 62, 63, 64,
    65, 66, 67, 68, 0, 108, 56, 57, 58, 59,
    60, 61, 62, 63, 64, 65, 66, 67, 68, 0,
    109, 56, 57, 58, 59, 60, 61, 62, 63, 64,
    65, 66, 67, 68, 0, 110, 56, 57, 58, 59,
    60, 61, 62, 63, 64, 65, 66, 67, 68, 56,
    57, 58, 59, 60, 61, 62, 0, 64, 65, 66,
    67, 68, 56, 57, 58, 59, 60, 61, 0, 0,
    64, 65, 66, 67, 68, 58, 59, 60, 61, 0,
    0, 64, 65, 66, 67, 68,
];

/// Key that owns each slot of `ENTRIES`
const CHECK: [i16; 416] = [
    20, 18, 19, 11, 21, 43, 15, 16, 18, 19,
    20, 21, 18, 19, 18, 19, 20, 21, 35, 36,
    37, 38, 3, 40, 0, 42, 41, 44, 38, 39,
    32, 33, 34, 39, 38, 44, 41, 18, 19, 56,
    57, 58, 59, 60, 61, 62, 63, 64, 65, 66,
    67, 68, 3, 4, 5, 6, 7, 8, 9, 76,
    11, 12, 13, 14, 38, 39, 17, 18, 19, 41,
    3, 4, 3, 90, 5, 6, 7, 8, 36, 37,
    31, 119, 38, 39, 41, 18, 19, 3, 4, 36,
    41, 3, 43, 44, 3, 46, 3, 114, 31, 116,
    36, 118, 36, 41, 39, 113, 123, 115, 41, 12,
    38, 3, 36, 46, 131, 37, 4, 38, 43, 3,
    4, 5, 6, 7, 8, 9, 40, 11, 12, 13,
    14, 139, 4, 17, 18, 19, 30, 31, 32, 33,
    34, 10, 159, 160, 161, 36, 3, 31, 168, 36,
    40, 3, 37, 42, 174, 175, 164, 41, 119, 43,
    -1, -1, 46, 22, 23, 24, 25, 26, 27, 28,
    29, 30, 31, 32, 33, 34, 94, 45, 45, 45,
    165, -1, -1, 42, 22, 23, 24, 25, 26, 27,
    28, 29, 30, 31, 32, 33, 34, -1, -1, -1,
    -1, -1, -1, -1, 42, 22, 23, 24, 25, 26,
    27, 28, 29, 30, 31, 32, 33, 34, -1, -1,
    -1, -1, -1, -1, -1, 42, 22, 23, 24, 25,
    26, 27, 28, 29, 30, 31, 32, 33, 34, -1,
    -1, -1, -1, -1, -1, -1, 42, 22, 23, 24,
    25, 26, 27, 28, 29, 30, 31, 32, 33, 34,
    -1, -1, -1, -1, -1, -1, -1, 42, 22, 23,
    24, 25, 26, 27, 28, 29, 30, 31, 32, 33,
    34, -1, -1, -1, -1, -1, 40, 22, 23, 24,
    25, 26, 27, 28, 29, 30, 31, 32, 33, 34,
    -1, -1, -1, -1, -1, 40, 22, 23, 24, 25,
    26, 27, 28, 29, 30, 31, 32, 33, 34, -1,
    36, 22, 23, 24, 25, 26, 27, 28, 29, 30,
    31, 32, 33, 34, -1, 36, 22, 23, 24, 25,
    26, 27, 28, 29, 30, 31, 32, 33, 34, -1,
    36, 22, 23, 24, 25, 26, 27, 28, 29, 30,
    31, 32, 33, 34, -1, 36, 22, 23, 24, 25,
    26, 27, 28, 29, 30, 31, 32, 33, 34, 22,
    23, 24, 25, 26, 27, 28, -1, 30, 31, 32,
    33, 34, 22, 23, 24, 25, 26, 27, -1, -1,
    30, 31, 32, 33, 34, 24, 25, 26, 27, -1,
    -1, 30, 31, 32, 33, 34,
];

/// Left-hand side and right-hand-side length of each rule
const RULES: [Rule; 90] = [
    Rule { lhs: 0, len: 0 },
    Rule { lhs: 47, len: 2 },
    Rule { lhs: 48, len: 1 },
    Rule { lhs: 49, len: 0 },
    Rule { lhs: 49, len: 2 },
    Rule { lhs: 50, len: 1 },
    Rule { lhs: 50, len: 1 },
    Rule { lhs: 50, len: 1 },
    Rule { lhs: 50, len: 1 },
    Rule { lhs: 50, len: 1 },
    Rule { lhs: 50, len: 1 },
    Rule { lhs: 50, len: 1 },
    Rule { lhs: 50, len: 1 },
    Rule { lhs: 50, len: 2 },
    Rule { lhs: 51, len: 3 },
    Rule { lhs: 52, len: 1 },
    Rule { lhs: 52, len: 1 },
    Rule { lhs: 52, len: 1 },
    Rule { lhs: 52, len: 1 },
    Rule { lhs: 53, len: 1 },
    Rule { lhs: 53, len: 3 },
    Rule { lhs: 54, len: 1 },
    Rule { lhs: 54, len: 3 },
    Rule { lhs: 54, len: 2 },
    Rule { lhs: 54, len: 4 },
    Rule { lhs: 55, len: 3 },
    Rule { lhs: 55, len: 4 },
    Rule { lhs: 56, len: 5 },
    Rule { lhs: 56, len: 7 },
    Rule { lhs: 57, len: 7 },
    Rule { lhs: 58, len: 5 },
    Rule { lhs: 59, len: 9 },
    Rule { lhs: 60, len: 0 },
    Rule { lhs: 60, len: 1 },
    Rule { lhs: 61, len: 1 },
    Rule { lhs: 61, len: 3 },
    Rule { lhs: 62, len: 3 },
    Rule { lhs: 62, len: 4 },
    Rule { lhs: 62, len: 2 },
    Rule { lhs: 63, len: 0 },
    Rule { lhs: 63, len: 1 },
    Rule { lhs: 64, len: 0 },
    Rule { lhs: 64, len: 1 },
    Rule { lhs: 65, len: 1 },
    Rule { lhs: 65, len: 3 },
    Rule { lhs: 66, len: 2 },
    Rule { lhs: 66, len: 2 },
    Rule { lhs: 66, len: 2 },
    Rule { lhs: 66, len: 2 },
    Rule { lhs: 66, len: 3 },
    Rule { lhs: 66, len: 3 },
    Rule { lhs: 66, len: 3 },
    Rule { lhs: 67, len: 7 },
    Rule { lhs: 68, len: 0 },
    Rule { lhs: 68, len: 2 },
    Rule { lhs: 69, len: 4 },
    Rule { lhs: 69, len: 4 },
    Rule { lhs: 69, len: 3 },
    Rule { lhs: 70, len: 3 },
    Rule { lhs: 71, len: 4 },
    Rule { lhs: 71, len: 4 },
    Rule { lhs: 71, len: 4 },
    Rule { lhs: 71, len: 3 },
    Rule { lhs: 71, len: 3 },
    Rule { lhs: 71, len: 2 },
    Rule { lhs: 72, len: 3 },
    Rule { lhs: 72, len: 3 },
    Rule { lhs: 72, len: 3 },
    Rule { lhs: 72, len: 3 },
    Rule { lhs: 72, len: 3 },
    Rule { lhs: 72, len: 3 },
    Rule { lhs: 72, len: 3 },
    Rule { lhs: 72, len: 3 },
    Rule { lhs: 72, len: 3 },
    Rule { lhs: 72, len: 3 },
    Rule { lhs: 72, len: 3 },
    Rule { lhs: 72, len: 3 },
    Rule { lhs: 72, len: 3 },
    Rule { lhs: 72, len: 2 },
    Rule { lhs: 72, len: 2 },
    Rule { lhs: 72, len: 2 },
    Rule { lhs: 72, len: 2 },
    Rule { lhs: 72, len: 2 },
    Rule { lhs: 72, len: 2 },
    Rule { lhs: 72, len: 2 },
    Rule { lhs: 72, len: 3 },
    Rule { lhs: 72, len: 1 },
    Rule { lhs: 72, len: 1 },
    Rule { lhs: 73, len: 3 },
    Rule { lhs: 73, len: 4 },
];

/// Printable name of every terminal followed by every nonterminal
const SYMBOLS: [&str; 74] = [
    "end of file", "error", "invalid token", "ID", "NUM", "INT", "FLOAT", "CHAR", "DOUBLE",
    "IF", "ELSE", "DO", "WHILE", "FOR", "SWITCH", "CASE", "DEFAULT", "BREAK", "INC", "DEC",
    "ADDASSIGN", "SUBASSIGN", "EQ", "NEQ", "LE", "GE", "LT", "GT", "AND", "OR", "'+'", "'-'",
    "'*'", "'/'", "'%'", "UMINUS", "';'", "','", "'='", "'['", "']'", "'('", "')'", "'{'",
    "'}'", "':'", "'!'", "$accept", "program", "stmt_list", "stmt", "decl_stmt", "type",
    "declarator_list", "declarator", "dim_list", "if_stmt", "do_while_stmt", "while_stmt",
    "for_stmt", "for_init", "for_init_list", "for_init_item", "for_cond", "for_update",
    "for_update_list", "for_update_item", "switch_stmt", "case_list", "case_clause", "block",
    "expr_stmt", "expr", "index_list",
];

pub static TABLE: CompressedTable = CompressedTable {
    final_state: FINAL_STATE,
    num_terminals: NUM_TERMINALS,
    base_default: BASE_DEFAULT,
    entry_error: ENTRY_ERROR,
    base: &BASE,
    default_reductions: &DEFAULT_REDUCTIONS,
    goto_base: &GOTO_BASE,
    default_gotos: &DEFAULT_GOTOS,
    entries: &ENTRIES,
    check: &CHECK,
    rules: &RULES,
    symbols: &SYMBOLS,
};
