//! Local-effect classification
//!
//! `classify` is a pure function of one statement's subtree; it never sees
//! other statements. The walk dispatches on node kind so that every
//! identifier lands in GEN, KILL, or nowhere according to its syntactic
//! role:
//!
//! - value-reading identifiers -> GEN
//! - direct assignment targets and declaration bindings -> KILL
//! - member/subscript assignment targets -> the base object is read (GEN);
//!   properties and indices contribute nothing
//! - update expressions (`++`/`--`) -> GEN and KILL
//!
//! After the walk, KILL precedence removes any GEN entry also present in
//! KILL. The walk covers the entire subtree, including nested function
//! bodies, whose reads and bindings contribute to this statement's sets.

use tree_sitter::Node;

use crate::features::effects::EffectSets;
use crate::features::extraction::Statement;
use crate::features::parsing::javascript::{
    is_member_access, is_non_variable_identifier, node_kinds,
};
use crate::shared::models::SourceText;

/// Compute the GEN/KILL sets of one statement
pub fn classify(statement: &Statement<'_>, source: &SourceText) -> EffectSets {
    let mut effects = EffectSets::new();
    visit(statement.node, source, &mut effects);
    effects.apply_kill_precedence();
    effects
}

fn visit(node: Node<'_>, source: &SourceText, effects: &mut EffectSets) {
    match node.kind() {
        node_kinds::VARIABLE_DECLARATOR => {
            if let Some(name) = node.child_by_field_name("name") {
                bind_pattern(name, source, effects);
            }
            if let Some(value) = node.child_by_field_name("value") {
                visit(value, source, effects);
            }
        }

        node_kinds::ASSIGNMENT_EXPRESSION | node_kinds::AUGMENTED_ASSIGNMENT_EXPRESSION => {
            if let Some(left) = node.child_by_field_name("left") {
                assign_target(left, source, effects);
            }
            if let Some(right) = node.child_by_field_name("right") {
                visit(right, source, effects);
            }
        }

        node_kinds::UPDATE_EXPRESSION => match node.child_by_field_name("argument") {
            // `counter++` reads the prior value and immediately redefines it
            Some(arg) if arg.kind() == node_kinds::IDENTIFIER => {
                if let Some(name) = text(arg, source) {
                    effects.gen.insert(name.clone());
                    effects.kill.insert(name);
                }
            }
            Some(arg) => visit(arg, source, effects),
            None => {}
        },

        node_kinds::FOR_IN_STATEMENT => {
            // `for (let x of xs)` binds x; a bare loop target contributes nothing
            if node.child_by_field_name("kind").is_some() {
                if let Some(left) = node.child_by_field_name("left") {
                    bind_pattern(left, source, effects);
                }
            }
            if let Some(right) = node.child_by_field_name("right") {
                visit(right, source, effects);
            }
            if let Some(body) = node.child_by_field_name("body") {
                visit(body, source, effects);
            }
        }

        node_kinds::CATCH_CLAUSE => {
            if let Some(parameter) = node.child_by_field_name("parameter") {
                bind_pattern(parameter, source, effects);
            }
            if let Some(body) = node.child_by_field_name("body") {
                visit(body, source, effects);
            }
        }

        node_kinds::FORMAL_PARAMETERS => {
            for i in 0..node.named_child_count() {
                if let Some(parameter) = node.named_child(i) {
                    bind_pattern(parameter, source, effects);
                }
            }
        }

        node_kinds::ARROW_FUNCTION => {
            if let Some(parameter) = node.child_by_field_name("parameter") {
                bind_pattern(parameter, source, effects);
            }
            if let Some(parameters) = node.child_by_field_name("parameters") {
                visit(parameters, source, effects);
            }
            if let Some(body) = node.child_by_field_name("body") {
                visit(body, source, effects);
            }
        }

        // Function and class names are declaration names, not variable uses
        node_kinds::FUNCTION_DECLARATION
        | node_kinds::GENERATOR_FUNCTION_DECLARATION
        | node_kinds::FUNCTION_EXPRESSION
        | node_kinds::GENERATOR_FUNCTION
        | node_kinds::METHOD_DEFINITION => {
            if let Some(parameters) = node.child_by_field_name("parameters") {
                visit(parameters, source, effects);
            }
            if let Some(body) = node.child_by_field_name("body") {
                visit(body, source, effects);
            }
        }

        node_kinds::CLASS_DECLARATION | node_kinds::CLASS => {
            visit_children_except_name(node, source, effects);
        }

        // Import/export bindings are neither reads nor redefinitions
        node_kinds::IMPORT_STATEMENT | node_kinds::EXPORT_SPECIFIER => {}

        node_kinds::IDENTIFIER | node_kinds::SHORTHAND_PROPERTY_IDENTIFIER => {
            if let Some(name) = text(node, source) {
                effects.gen.insert(name);
            }
        }

        kind if is_non_variable_identifier(kind) => {}

        _ => visit_children(node, source, effects),
    }
}

fn visit_children(node: Node<'_>, source: &SourceText, effects: &mut EffectSets) {
    for i in 0..node.named_child_count() {
        if let Some(child) = node.named_child(i) {
            if !child.is_extra() {
                visit(child, source, effects);
            }
        }
    }
}

fn visit_children_except_name(node: Node<'_>, source: &SourceText, effects: &mut EffectSets) {
    let name_id = node.child_by_field_name("name").map(|n| n.id());
    for i in 0..node.named_child_count() {
        if let Some(child) = node.named_child(i) {
            if Some(child.id()) != name_id && !child.is_extra() {
                visit(child, source, effects);
            }
        }
    }
}

/// Left-hand side of an assignment
fn assign_target(node: Node<'_>, source: &SourceText, effects: &mut EffectSets) {
    match node.kind() {
        node_kinds::IDENTIFIER => {
            if let Some(name) = text(node, source) {
                effects.kill.insert(name);
            }
        }
        // Assigning into a member reads the base object; the property
        // alone never contributes
        node_kinds::MEMBER_EXPRESSION | node_kinds::SUBSCRIPT_EXPRESSION => {
            if let Some(base) = member_base(node) {
                if base.kind() == node_kinds::IDENTIFIER {
                    if let Some(name) = text(base, source) {
                        effects.gen.insert(name);
                    }
                } else {
                    visit(base, source, effects);
                }
            }
        }
        node_kinds::OBJECT_PATTERN | node_kinds::ARRAY_PATTERN => {
            bind_pattern(node, source, effects);
        }
        _ => {}
    }
}

/// Innermost object of a member/subscript chain
fn member_base(node: Node<'_>) -> Option<Node<'_>> {
    let mut current = node;
    while is_member_access(current.kind()) {
        current = current.child_by_field_name("object")?;
    }
    Some(current)
}

/// A binding position: every bound name is killed; nested default values
/// are ordinary reads
fn bind_pattern(node: Node<'_>, source: &SourceText, effects: &mut EffectSets) {
    match node.kind() {
        node_kinds::IDENTIFIER | node_kinds::SHORTHAND_PROPERTY_IDENTIFIER_PATTERN => {
            if let Some(name) = text(node, source) {
                effects.kill.insert(name);
            }
        }
        node_kinds::OBJECT_PATTERN | node_kinds::ARRAY_PATTERN => {
            for i in 0..node.named_child_count() {
                if let Some(child) = node.named_child(i) {
                    bind_pattern(child, source, effects);
                }
            }
        }
        node_kinds::PAIR_PATTERN => {
            // `{key: target}` binds the value side; a computed key is a read
            if let Some(key) = node.child_by_field_name("key") {
                if key.kind() == node_kinds::COMPUTED_PROPERTY_NAME {
                    visit(key, source, effects);
                }
            }
            if let Some(value) = node.child_by_field_name("value") {
                bind_pattern(value, source, effects);
            }
        }
        node_kinds::REST_PATTERN => {
            if let Some(inner) = node.named_child(0) {
                bind_pattern(inner, source, effects);
            }
        }
        node_kinds::ASSIGNMENT_PATTERN | node_kinds::OBJECT_ASSIGNMENT_PATTERN => {
            if let Some(left) = node.child_by_field_name("left") {
                bind_pattern(left, source, effects);
            }
            if let Some(right) = node.child_by_field_name("right") {
                visit(right, source, effects);
            }
        }
        // `[obj.x] = arr` assigns through a member, not a binding
        node_kinds::MEMBER_EXPRESSION | node_kinds::SUBSCRIPT_EXPRESSION => {
            assign_target(node, source, effects);
        }
        _ => {}
    }
}

fn text(node: Node<'_>, source: &SourceText) -> Option<String> {
    source.slice_bytes(node.byte_range()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::extraction::extract;
    use crate::features::parsing::EcmaParser;

    fn classify_program(source: &str) -> Vec<EffectSets> {
        let source = SourceText::new(source);
        let tree = EcmaParser::new().parse(&source).unwrap();
        let statements = extract(&tree, &source);
        statements.iter().map(|s| classify(s, &source)).collect()
    }

    fn names(set: &rustc_hash::FxHashSet<String>) -> Vec<&str> {
        let mut v: Vec<&str> = set.iter().map(String::as_str).collect();
        v.sort();
        v
    }

    #[test]
    fn test_declaration_kills_binding() {
        let effects = classify_program("let x = 5;");
        assert_eq!(names(&effects[0].gen), Vec::<&str>::new());
        assert_eq!(names(&effects[0].kill), vec!["x"]);
    }

    #[test]
    fn test_initializer_reads_contribute_gen() {
        let effects = classify_program("let z = x + y;");
        assert_eq!(names(&effects[0].gen), vec!["x", "y"]);
        assert_eq!(names(&effects[0].kill), vec!["z"]);
    }

    #[test]
    fn test_call_reads_callee_object_and_arguments() {
        let effects = classify_program("console.log(z);");
        assert_eq!(names(&effects[0].gen), vec!["console", "z"]);
        assert!(effects[0].kill.is_empty());
    }

    #[test]
    fn test_direct_assignment_kills_target() {
        let effects = classify_program("x = y;");
        assert_eq!(names(&effects[0].gen), vec!["y"]);
        assert_eq!(names(&effects[0].kill), vec!["x"]);
    }

    #[test]
    fn test_compound_assignment_kills_target() {
        let effects = classify_program("x += y;");
        assert_eq!(names(&effects[0].gen), vec!["y"]);
        assert_eq!(names(&effects[0].kill), vec!["x"]);
    }

    #[test]
    fn test_member_assignment_reads_base_object() {
        let effects = classify_program("obj.prop = value;");
        assert_eq!(names(&effects[0].gen), vec!["obj", "value"]);
        assert!(effects[0].kill.is_empty());
    }

    #[test]
    fn test_subscript_assignment_property_never_contributes() {
        let effects = classify_program("obj[key] = value;");
        assert_eq!(names(&effects[0].gen), vec!["obj", "value"]);
        assert!(effects[0].kill.is_empty());
    }

    #[test]
    fn test_subscript_read_index_is_a_use() {
        let effects = classify_program("let first = arr[i];");
        assert_eq!(names(&effects[0].gen), vec!["arr", "i"]);
        assert_eq!(names(&effects[0].kill), vec!["first"]);
    }

    #[test]
    fn test_update_expression_nets_to_kill() {
        let effects = classify_program("counter++;");
        assert!(effects[0].gen.is_empty());
        assert_eq!(names(&effects[0].kill), vec!["counter"]);
    }

    #[test]
    fn test_object_destructuring_kills_all_bindings() {
        let effects = classify_program("let {a, b: c, ...rest} = obj;");
        assert_eq!(names(&effects[0].gen), vec!["obj"]);
        assert_eq!(names(&effects[0].kill), vec!["a", "c", "rest"]);
    }

    #[test]
    fn test_array_destructuring_kills_all_bindings() {
        let effects = classify_program("let [first, , third, ...tail] = items;");
        assert_eq!(names(&effects[0].gen), vec!["items"]);
        assert_eq!(names(&effects[0].kill), vec!["first", "tail", "third"]);
    }

    #[test]
    fn test_destructuring_default_is_a_read() {
        let effects = classify_program("let {a = fallback} = obj;");
        assert_eq!(names(&effects[0].gen), vec!["fallback", "obj"]);
        assert_eq!(names(&effects[0].kill), vec!["a"]);
    }

    #[test]
    fn test_nested_function_reads_and_bindings_contribute() {
        let effects = classify_program("const f = (a) => { let local = a; return local + b; };");
        assert_eq!(names(&effects[0].gen), vec!["b"]);
        assert_eq!(names(&effects[0].kill), vec!["a", "f", "local"]);
    }

    #[test]
    fn test_function_declaration_name_is_not_a_use() {
        let effects = classify_program("function helper(n) { return n * scale; }");
        assert_eq!(names(&effects[0].gen), vec!["scale"]);
        assert_eq!(names(&effects[0].kill), vec!["n"]);
    }

    #[test]
    fn test_object_literal_shorthand_is_a_read() {
        let effects = classify_program("let o = {a, b: c};");
        assert_eq!(names(&effects[0].gen), vec!["a", "c"]);
        assert_eq!(names(&effects[0].kill), vec!["o"]);
    }

    #[test]
    fn test_property_names_never_contribute() {
        let effects = classify_program("let v = obj.width;");
        assert_eq!(names(&effects[0].gen), vec!["obj"]);
    }

    #[test]
    fn test_for_of_with_declaration_binds_loop_variable() {
        let effects = classify_program("for (let item of items) { total += item; }");
        // statement 0 is the whole loop
        assert_eq!(names(&effects[0].gen), vec!["items"]);
        assert_eq!(names(&effects[0].kill), vec!["item", "total"]);
    }

    #[test]
    fn test_kill_precedence_on_self_reference() {
        let effects = classify_program("x = x + 1;");
        assert!(effects[0].gen.is_empty());
        assert_eq!(names(&effects[0].kill), vec!["x"]);
    }

    #[test]
    fn test_sets_are_disjoint_after_classification() {
        for program in [
            "let x = x;",
            "counter++; --counter;",
            "let a = 1; a = a + a;",
            "for (i = 1; i <= 5; i++) { sum = sum + i; }",
        ] {
            for effects in classify_program(program) {
                assert!(effects.is_disjoint(), "GEN and KILL overlap in {program:?}");
            }
        }
    }
}
