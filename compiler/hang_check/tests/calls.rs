//! Call rule scenarios: FHG002, FHG003, FHG005, FHG006, plus FHG007 where
//! the call is an assigned value.

mod common;

use common::{codes, dedent, diagnostics, run_cases, Case};
use hang_diagnostic::RuleCode;
use hang_ir::SourcePosition;
use pretty_assertions::assert_eq;

const CASES: &[Case] = &[
    Case {
        name: "hanging_arguments_one_line",
        code: r#"
    def foo():
        if use_shap:
            shap_values, shap_interaction_values = _calc_shap(
                df, estimator, feature_columns, shap_interactions,
            )
"#,
        expected: &[],
    },
    Case {
        name: "one_argument_per_line",
        code: r#"
    def foo():
        if use_shap:
            shap_values, shap_interaction_values = _calc_shap(
                df,
                estimator,
                feature_columns,
                shap_interactions,
            )
"#,
        expected: &[],
    },
    Case {
        name: "keyword_close_on_argument_line",
        code: r#"
    def foo():
        my_func(value='name',
            other_value='hello')
"#,
        expected: &[RuleCode::FHG005],
    },
    Case {
        name: "concatenated_string_with_trailing_keyword",
        code: r#"
    print(  # noqa
        'one line'
        f'{report_dir_path / report_name}', end=' ',
    )
"#,
        expected: &[],
    },
    Case {
        name: "keywords_with_mapping_unpacking",
        code: r#"
    try:
        current_controller = CacheController(
            check_version_level=check_version_level,
            check_func_code_hash=check_func_code_hash,
            **controller_kwargs,
        )
    except ValidationError as e:
        raise ValueError()
"#,
        expected: &[],
    },
    Case {
        name: "starred_argument",
        code: r#"
    current_controller = CacheController(
        *controller_kwargs,
    )
"#,
        expected: &[],
    },
    Case {
        name: "mixed_keywords_and_unpacking",
        code: r#"
    t_group, bins_data = get_groups(
        df=df[feature_columns + [target_column]],
        continuous=continuous,
        categorical=categorical,
        target_column=target_column,
        **(grouping_params or {}),
    )
"#,
        expected: &[],
    },
    Case {
        name: "nested_calls_and_displays",
        code: r#"
    return cls(
        func_code_hash=fixed_hash or joblib.hash(
            func.__code__.co_consts
            + (func.__code__.co_code,),
        ),
        func_args_kwargs={
            'args': yaml_repr(func_args or []),
            'kwargs': yaml_repr(func_kwargs or {}),
        },
        **base_meta.dict(),
    )
"#,
        expected: &[],
    },
    Case {
        name: "parenthesized_keyword_value",
        code: r#"
    subplot = Plot(
        linewidth=(
            wide_line
            if best_score and score.params == best_score.params
            else default_line
        ),
    )
"#,
        expected: &[],
    },
    Case {
        name: "formatted_string_argument",
        code: r#"
    subprocess.run(
        f'python{python_version} -m venv venv',
        shell=True, check=True, cwd=directory,
    )
"#,
        expected: &[],
    },
    Case {
        name: "keywords_only",
        code: r#"
    x(
        shell=True,
        check=True,
        cwd=directory,
    )
"#,
        expected: &[],
    },
    Case {
        name: "positional_then_keyword",
        code: r#"
    x(
        1,
        2,
        y=10,
    )
"#,
        expected: &[],
    },
    Case {
        name: "argumentless_call_chain",
        code: r#"
    for key in predictor_instance.dict().keys():
        value = getattr(predictor_instance, key)
"#,
        expected: &[],
    },
    Case {
        name: "one_line_dict",
        code: r#"
    kafka_config = {'bootstrap.servers': settings["kafka"].get("url")}
"#,
        expected: &[],
    },
    Case {
        name: "parenthesized_callee",
        code: r#"
    def _format_error(self, value, message) -> str:
        return (self.error or message).format(
            input=value,
            min=self.format_min(),
            max=self.format_max(),
        )
"#,
        expected: &[],
    },
    Case {
        name: "first_argument_on_call_line",
        code: r#"
    if a != b:
        error_message = get_error_message(param,
            other_param,
        )
"#,
        expected: &[],
    },
    Case {
        name: "arguments_after_call_line",
        code: r#"
    if a != b:
        error_message = get_error_message(
            param,
            other_param,
        )
"#,
        expected: &[],
    },
    Case {
        name: "aligned_with_open_bracket",
        code: r#"
    def foo():
        if use_shap:
            shap_values, shap_interaction_values = _calc_shap(df, estimator, feature_columns,
                                                                shap_interactions)
"#,
        expected: &[RuleCode::FHG002, RuleCode::FHG005, RuleCode::FHG007],
    },
    Case {
        name: "aligned_under_first_argument",
        code: r#"
    if a != b:
        error_message = get_error_message(param,
                                          other_param)
"#,
        expected: &[RuleCode::FHG002, RuleCode::FHG005, RuleCode::FHG007],
    },
    Case {
        name: "keyword_aligned_under_first",
        code: r#"
    def foo():
        my_func(value='name',
                other_value='hello')
"#,
        expected: &[RuleCode::FHG003, RuleCode::FHG005],
    },
    Case {
        name: "keyword_close_trails_last",
        code: r#"
    def foo():
        my_func(
            value='name',
            other_value='hello')
"#,
        expected: &[RuleCode::FHG005],
    },
    Case {
        name: "positional_close_trails_last",
        code: r#"
    def foo():
        my_func(
            'name',
            'hello')
"#,
        expected: &[RuleCode::FHG005],
    },
    Case {
        name: "keyword_close_over_indented",
        code: r#"
    def foo():
        my_func(
            value='name',
            other_value='hello'
            )
"#,
        expected: &[RuleCode::FHG006],
    },
    Case {
        name: "positional_close_over_indented",
        code: r#"
    def foo():
        my_func(
            'name',
            'hello'
            )
"#,
        expected: &[RuleCode::FHG006],
    },
    Case {
        name: "assigned_call_close_over_indented",
        code: r#"
    def foo():
        result = my_func(
            value='name',
            other_value='hello'
            )
"#,
        expected: &[RuleCode::FHG006, RuleCode::FHG007],
    },
    Case {
        name: "nested_brackets_close_together",
        code: r#"
    def foo():
        my_func({(
            'name',
            'hello'
        )})
"#,
        expected: &[],
    },
    Case {
        name: "nested_brackets_single_item",
        code: r#"
    def foo():
        my_func({(
            'name'
        )})
"#,
        expected: &[],
    },
    Case {
        name: "comment_with_brackets",
        code: r#"
    def foo():
        my_func({(  # comment with brackets ((
            123
        )})
"#,
        expected: &[],
    },
    Case {
        name: "double_quoted_multiline_string",
        code: r#"
    my_str = """
    hey
    """
"#,
        expected: &[],
    },
    Case {
        name: "single_quoted_multiline_string",
        code: r#"
    hello = '''
    world
    '''
"#,
        expected: &[],
    },
    Case {
        name: "decorator_with_bracketed_arguments",
        code: r#"
    @parametrize('value, error_messages', (
        (incorrect_1, None),
    ))
    def my_func():
        pass
"#,
        expected: &[],
    },
    Case {
        name: "generator_argument",
        code: r#"
    def shorten_key(value: Any) -> str:
        return divider.join(
            part[:max_part_length]
            for part in value
        )
"#,
        expected: &[],
    },
    Case {
        name: "generator_close_trails_clause",
        code: r#"
    def shorten_key(value: Any) -> str:
        return divider.join(
            part[:max_part_length]
            for part in value)
"#,
        expected: &[RuleCode::FHG005],
    },
    Case {
        name: "keywords_with_comments",
        code: r#"
    subplot = Plot(
        x=list(range(1, len(score.cv_scores) + 1)),  # number of CV split on X axis
        y=score.cv_scores,  # CV score on Y axis
        label=score.tag or f'#{i}' if enable_labels else None,
        linewidth=(
            wide_line
            if best_score and score.params == best_score.params
            else default_line
        ),
        set_xticks=True,
        plot_type=plot_type,
    )
"#,
        expected: &[],
    },
];

#[test]
fn test_call_cases() {
    run_cases(CASES, str::to_owned);
}

#[test]
fn test_reported_positions() {
    let source = dedent(
        "
        if a != b:
            error_message = get_error_message(param,
                                              other_param)
        ",
    );
    let found: Vec<_> = diagnostics(&source)
        .iter()
        .map(|d| (d.position, d.code()))
        .collect();
    assert_eq!(
        found,
        vec![
            (SourcePosition::new(4, 38), "FHG002"),
            (SourcePosition::new(4, 49), "FHG005"),
            (SourcePosition::new(4, 50), "FHG007"),
        ]
    );
}

#[test]
fn test_same_line_brackets_before_multiline_tail() {
    // Only the dict is open across lines; the list closes on the call line.
    let source = dedent(
        "
        run([1, 2], {
            'key': 1,
        })
        ",
    );
    assert!(codes(&source).is_empty());

    let source = dedent(
        "
        run([1, 2], {
            'key': 1,
        } )
        ",
    );
    assert_eq!(codes(&source), vec![RuleCode::FHG006]);
}

#[test]
fn test_brackets_inside_strings_do_not_pair() {
    let source = dedent(
        "
        value = parse(
            '(((',
            text=']]',
        )
        ",
    );
    assert!(codes(&source).is_empty());
}

#[test]
fn test_subscript_callee_name_bounds_arguments() {
    // `handlers[key]` is 13 characters: column 12 is inside the bound.
    let source = dedent(
        "
        handlers[key](first,
                    second,
        )
        ",
    );
    assert!(codes(&source).is_empty());
}
