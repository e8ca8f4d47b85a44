//! Property-based tests over generated straight-line programs
//!
//! Programs are chains of simple declarations, assignments, updates, and
//! reads over a small variable pool; every generated program must satisfy
//! the solver invariants and analyze deterministically.

use proptest::prelude::*;

use lva_engine::analyze;

const VARS: [&str; 5] = ["a", "b", "c", "d", "e"];

#[derive(Debug, Clone)]
enum Line {
    Declare(usize, usize),
    Assign(usize, usize),
    Update(usize),
    Log(usize),
}

impl Line {
    fn render(&self) -> String {
        match self {
            Line::Declare(target, from) => {
                format!("let {} = {} + 1;", VARS[*target], VARS[*from])
            }
            Line::Assign(target, from) => format!("{} = {};", VARS[*target], VARS[*from]),
            Line::Update(target) => format!("{}++;", VARS[*target]),
            Line::Log(target) => format!("console.log({});", VARS[*target]),
        }
    }
}

fn line_strategy() -> impl Strategy<Value = Line> {
    prop_oneof![
        (0..VARS.len(), 0..VARS.len()).prop_map(|(t, f)| Line::Declare(t, f)),
        (0..VARS.len(), 0..VARS.len()).prop_map(|(t, f)| Line::Assign(t, f)),
        (0..VARS.len()).prop_map(Line::Update),
        (0..VARS.len()).prop_map(Line::Log),
    ]
}

fn program_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(line_strategy(), 1..25).prop_map(|lines| {
        lines
            .iter()
            .map(Line::render)
            .collect::<Vec<_>>()
            .join("\n")
    })
}

proptest! {
    #[test]
    fn generated_programs_satisfy_invariants(program in program_strategy()) {
        let result = analyze(&program).unwrap();
        let statement_count = result.statements.len();

        prop_assert_eq!(result.summary.total_statements, statement_count);
        prop_assert_eq!(result.total_lines, program.lines().count());

        for (idx, statement) in result.statements.iter().enumerate() {
            prop_assert_eq!(statement.id, idx);

            // GEN ∩ KILL = ∅
            for name in &statement.gen {
                prop_assert!(!statement.kill.contains(name));
            }

            // IN[n] = GEN[n] ∪ (OUT[n] \ KILL[n])
            let mut expected: Vec<String> = statement.gen.clone();
            for name in &statement.live_out {
                if !statement.kill.contains(name) && !expected.contains(name) {
                    expected.push(name.clone());
                }
            }
            expected.sort();
            prop_assert_eq!(&statement.live_in, &expected);

            // OUT[n] = IN[n + 1]
            if idx + 1 < statement_count {
                prop_assert_eq!(&statement.live_out, &result.statements[idx + 1].live_in);
            } else {
                prop_assert!(statement.live_out.is_empty());
            }
        }
    }

    #[test]
    fn analysis_is_idempotent(program in program_strategy()) {
        let first = serde_json::to_string(&analyze(&program).unwrap()).unwrap();
        let second = serde_json::to_string(&analyze(&program).unwrap()).unwrap();
        prop_assert_eq!(first, second);
    }
}
