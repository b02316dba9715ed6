use super::*;

fn layout(left_width: usize) -> RenderLayout {
    RenderLayout {
        left_width,
        separator_width: 20,
    }
}

#[test]
fn identical_line_is_unified_only_when_requested() {
    assert_eq!(
        align(&["Artist: A"], &["Artist: A"], true),
        vec![AlignedLine::Unified("Artist: A".into())]
    );
    assert_eq!(
        align(&["Artist: A"], &["Artist: A"], false),
        vec![AlignedLine::Paired("Artist: A".into(), "Artist: A".into())]
    );
}

#[test]
fn length_is_max_of_both_sides_with_empty_fill() {
    let left = ["a", "b", "c"];
    let right = ["a"];
    let out = align(&left, &right, true);
    assert_eq!(out.len(), 3);
    assert_eq!(out[0], AlignedLine::Unified("a".into()));
    assert_eq!(out[1], AlignedLine::Paired("b".into(), String::new()));
    assert_eq!(out[2], AlignedLine::Paired("c".into(), String::new()));

    let out = align::<&str, &str>(&[], &["x", "y"], true);
    assert_eq!(
        out,
        vec![
            AlignedLine::Paired(String::new(), "x".into()),
            AlignedLine::Paired(String::new(), "y".into()),
        ]
    );
    assert!(align::<&str, &str>(&[], &[], true).is_empty());
}

#[test]
fn empty_lines_on_both_sides_stay_paired() {
    assert_eq!(
        align(&[""], &[""], true),
        vec![AlignedLine::Paired(String::new(), String::new())]
    );
}

#[test]
fn alignment_is_positional_not_content_aware() {
    // "b" appears on both sides but at different indices: no unification.
    let out = align(&["a", "b"], &["b", "a"], true);
    assert!(out.iter().all(|l| matches!(l, AlignedLine::Paired(_, _))));
}

#[test]
fn totality_and_unification_hold_across_shapes() {
    let pool = ["", "x", "y", "Title: z"];
    for ll in 0..4 {
        for rl in 0..4 {
            let left: Vec<&str> = (0..ll).map(|i| pool[(i * 3 + ll) % 4]).collect();
            let right: Vec<&str> = (0..rl).map(|i| pool[(i + rl) % 4]).collect();
            for unify in [true, false] {
                let out = align(&left, &right, unify);
                assert_eq!(out.len(), ll.max(rl));
                for (i, line) in out.iter().enumerate() {
                    let l = left.get(i).copied().unwrap_or("");
                    let r = right.get(i).copied().unwrap_or("");
                    if unify && !l.is_empty() && l == r {
                        assert_eq!(line, &AlignedLine::Unified(l.to_string()));
                    } else {
                        assert_eq!(line, &AlignedLine::Paired(l.to_string(), r.to_string()));
                    }
                }
            }
        }
    }
}

#[test]
fn paired_rows_pad_left_column_and_leave_right_untouched() {
    let line = AlignedLine::Paired("abc".into(), "right side  ".into());
    assert_eq!(render_line(&line, &layout(6)), "abc    | right side  ");
}

#[test]
fn paired_rows_truncate_long_left_text_by_chars() {
    let line = AlignedLine::Paired("héllo wörld".into(), "r".into());
    assert_eq!(render_line(&line, &layout(5)), "héllo | r");
}

#[test]
fn unified_rows_carry_marker_prefix() {
    let line = AlignedLine::Unified("Album: X".into());
    assert_eq!(render_line(&line, &layout(6)), "          == Album: X");
}

#[test]
fn render_keeps_input_order() {
    let lines = align(&["same", "l"], &["same", "r"], true);
    let out = render(&lines, &layout(2));
    assert_eq!(out, vec!["          == same".to_string(), "l  | r".to_string()]);
}
