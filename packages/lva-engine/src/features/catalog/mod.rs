//! Curated example snippets
//!
//! A fixed, read-only catalogue used to seed interactive demonstrations.
//! No behavioral coupling to the engine beyond being valid input.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use serde::Serialize;

/// One demonstration snippet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExampleSnippet {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub code: &'static str,
}

static EXAMPLES: &[ExampleSnippet] = &[
    ExampleSnippet {
        id: "simple",
        title: "Simple Assignment",
        description: "Basic variable assignments and usage",
        code: "let x = 5;\nlet y = 10;\nlet z = x + y;\nconsole.log(z);",
    },
    ExampleSnippet {
        id: "conditional",
        title: "Conditional Statement",
        description: "Variables in if-else blocks",
        code: "let a = 10;\nlet b = 20;\nif (a > b) {\n  let c = a;\n} else {\n  let c = b;\n}\nconsole.log(a, b);",
    },
    ExampleSnippet {
        id: "loop",
        title: "Loop Example",
        description: "Variables in a for loop",
        code: "let sum = 0;\nlet i = 0;\nfor (i = 1; i <= 5; i++) {\n  sum = sum + i;\n}\nconsole.log(sum);",
    },
    ExampleSnippet {
        id: "multiple",
        title: "Multiple Operations",
        description: "Multiple variable operations",
        code: "let a = 5;\nlet b = 10;\nlet c = a + b;\na = c * 2;\nb = a - c;\nlet result = a + b + c;",
    },
    ExampleSnippet {
        id: "reassignment",
        title: "Variable Reassignment",
        description: "Variables being reassigned",
        code: "let x = 1;\nx = x + 1;\nx = x * 2;\nlet y = x;\ny = y + 5;",
    },
    ExampleSnippet {
        id: "function",
        title: "Function Call",
        description: "Variables with function calls",
        code: "let num = 10;\nlet square = num * num;\nconsole.log(square);\nlet cube = square * num;\nconsole.log(cube);",
    },
    ExampleSnippet {
        id: "array",
        title: "Array Operations",
        description: "Working with arrays",
        code: "let arr = [1, 2, 3];\nlet first = arr[0];\nlet sum = first + arr[1];\narr[2] = sum;",
    },
    ExampleSnippet {
        id: "increment",
        title: "Increment/Decrement",
        description: "Using ++ and -- operators",
        code: "let counter = 0;\ncounter++;\nlet temp = counter;\ncounter--;\nlet result = temp + counter;",
    },
    ExampleSnippet {
        id: "complex",
        title: "Complex Example",
        description: "More complex dataflow",
        code: "let a = 5;\nlet b = 10;\nlet c = 15;\nlet temp = a + b;\na = temp * c;\nb = a - temp;\nc = b + temp;\nlet final = a + b + c;",
    },
    ExampleSnippet {
        id: "dead_code",
        title: "Dead Code Detection",
        description: "Variables that are assigned but never used",
        code: "let x = 5;\nlet y = 10;\nlet z = x + y;\nx = 20;\ny = 30;\nconsole.log(z);",
    },
];

static BY_ID: Lazy<FxHashMap<&'static str, &'static ExampleSnippet>> =
    Lazy::new(|| EXAMPLES.iter().map(|example| (example.id, example)).collect());

/// All snippets, in catalogue order
pub fn all() -> &'static [ExampleSnippet] {
    EXAMPLES
}

/// Look up one snippet by id
pub fn find(id: &str) -> Option<&'static ExampleSnippet> {
    BY_ID.get(id).copied()
}
