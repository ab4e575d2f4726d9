#[cfg(test)]
mod verify {
    use pseudocode::language::*;
    use pseudocode::rendering::*;

    fn trim(text: &str) -> &str {
        text.trim_start_matches('\n')
    }

    fn name(id: &str) -> Expression {
        Expression::Name { id: id.to_string() }
    }

    fn string(value: &str) -> Expression {
        Expression::String {
            value: value.to_string(),
        }
    }

    fn integer(value: i64) -> Expression {
        Expression::Number {
            value: Numeric::Integral(value),
        }
    }

    fn call(func: &str, args: Vec<Expression>) -> Expression {
        Expression::Call {
            func: Box::new(name(func)),
            args,
            keywords: vec![],
        }
    }

    fn subscript(base: &str, index: Expression) -> Expression {
        Expression::Subscript {
            value: Box::new(name(base)),
            index: Box::new(index),
        }
    }

    fn assign(target: Expression, value: Expression) -> Statement {
        Statement::Assignment {
            targets: vec![target],
            value,
        }
    }

    fn directive(text: &str) -> Statement {
        Statement::Expression {
            value: string(text),
        }
    }

    fn overlap(form: &str, phantom: Expression, body: Vec<Statement>) -> Statement {
        Statement::Scoped {
            items: vec![Expression::Call {
                func: Box::new(name(form)),
                args: vec![],
                keywords: vec![Keyword {
                    arg: Some("phantom".to_string()),
                    value: phantom,
                }],
            }],
            body,
        }
    }

    fn module(body: Vec<Statement>) -> Module {
        Module { body }
    }

    fn texts(document: &Document) -> Vec<&str> {
        document
            .lines
            .iter()
            .map(|line| line.text.as_str())
            .collect()
    }

    #[test]
    fn procedure_with_parameters() {
        let tree = module(vec![Statement::Definition(Definition {
            name: "Search".to_string(),
            parameters: vec![
                Parameter {
                    name: "MC_G".to_string(),
                    annotation: None,
                },
                Parameter {
                    name: "v_0".to_string(),
                    annotation: Some(string("root")),
                },
            ],
            returns: None,
            body: vec![Statement::Return { value: None }],
        })]);

        let document = render(&tree).unwrap();
        assert_eq!(
            document.to_string(),
            trim(
                r#"
\Procedure{Search}{\PyArg{\mathcal{G}}\PyArgSep\PyArgAnnotation{v_0}{root}}
  \Return{}
\EndProcedure%
"#
            )
        );
    }

    #[test]
    fn function_with_return_type() {
        let tree = module(vec![Statement::Definition(Definition {
            name: "Cost".to_string(),
            parameters: vec![Parameter {
                name: "e".to_string(),
                annotation: None,
            }],
            returns: Some(string("real")),
            body: vec![Statement::Return {
                value: Some(call("w", vec![name("e")])),
            }],
        })]);

        let document = render(&tree).unwrap();
        assert_eq!(
            document.to_string(),
            trim(
                r#"
\Function{Cost}{\PyArg{e}}{ $\rightarrow$ \texttt{real}}
  \Return{\PyExpr{\PyCall{\PyName{w}}{\PyName{e}}}}
\EndFunction%
"#
            )
        );
    }

    #[test]
    fn nested_conditionals_indent() {
        let innermost = Statement::If {
            test: name("c"),
            body: vec![assign(name("x"), integer(1))],
            orelse: vec![],
        };
        let middle = Statement::If {
            test: name("b"),
            body: vec![innermost],
            orelse: vec![],
        };
        let outer = Statement::If {
            test: name("a"),
            body: vec![middle],
            orelse: vec![],
        };

        let document = render(&module(vec![outer])).unwrap();
        let depths: Vec<usize> = document
            .lines
            .iter()
            .map(|line| line.depth)
            .collect();

        assert_eq!(depths, vec![0, 1, 2, 3, 2, 1, 0]);
        assert_eq!(
            document.lines[3].text,
            "\\State{\\PyAssign{\\PyName{x}}{\\PyNum{1}}}"
        );
    }

    #[test]
    fn conditional_chain_flattened() {
        let tree = module(vec![Statement::If {
            test: name("a"),
            body: vec![Statement::Return {
                value: Some(integer(1)),
            }],
            orelse: vec![Statement::If {
                test: name("b"),
                body: vec![Statement::Return {
                    value: Some(integer(2)),
                }],
                orelse: vec![Statement::Return {
                    value: Some(integer(3)),
                }],
            }],
        }]);

        let document = render(&tree).unwrap();
        assert_eq!(
            document.to_string(),
            trim(
                r#"
\If{\PyExpr{\PyName{a}}}
  \Return{\PyExpr{\PyNum{1}}}
\ElsIf{\PyExpr{\PyName{b}}}
  \Return{\PyExpr{\PyNum{2}}}
\Else%
  \Return{\PyExpr{\PyNum{3}}}
\EndIf%
"#
            )
        );
    }

    #[test]
    fn else_with_several_statements_not_flattened() {
        let tree = module(vec![Statement::If {
            test: name("a"),
            body: vec![],
            orelse: vec![
                Statement::If {
                    test: name("b"),
                    body: vec![],
                    orelse: vec![],
                },
                Statement::Return { value: None },
            ],
        }]);

        let document = render(&tree).unwrap();
        assert_eq!(
            texts(&document),
            vec![
                "\\If{\\PyExpr{\\PyName{a}}}",
                "\\Else%",
                "\\If{\\PyExpr{\\PyName{b}}}",
                "\\EndIf%",
                "\\Return{}",
                "\\EndIf%",
            ]
        );
    }

    #[test]
    fn emission_toggle() {
        let tree = module(vec![
            directive("!hide"),
            Statement::Expression {
                value: call("A", vec![]),
            },
            directive("!show"),
            Statement::Expression {
                value: call("B", vec![]),
            },
        ]);

        let document = render(&tree).unwrap();
        assert_eq!(
            texts(&document),
            vec!["\\State{\\PyExpr{\\PyCall{\\PyName{B}}{}}}"]
        );
    }

    #[test]
    fn hidden_definition_skipped_entirely() {
        let tree = module(vec![
            directive("!hide"),
            Statement::Definition(Definition {
                name: "helper".to_string(),
                parameters: vec![],
                returns: None,
                body: vec![directive("!show"), assign(name("x"), integer(1))],
            }),
            Statement::Return { value: None },
        ]);

        // the !show inside the skipped body is never seen
        let document = render(&tree).unwrap();
        assert!(document.is_empty());
    }

    #[test]
    fn overlap_scope_restored() {
        let tree = module(vec![
            overlap(
                "llap",
                subscript("D", name("i")),
                vec![assign(name("x"), integer(1))],
            ),
            assign(name("y"), integer(2)),
        ]);

        let document = render(&tree).unwrap();
        assert_eq!(
            document.lines,
            vec![
                Line {
                    text: "\\State{\\PyAssign{\\hphantom{\\PySubscript{\\PyName{D}}{\\PyName{i}}}\\llap{\\PyName{x}}}{\\PyNum{1}}}".to_string(),
                    depth: 1,
                },
                Line {
                    text: "\\State{\\PyAssign{\\PyName{y}}{\\PyNum{2}}}".to_string(),
                    depth: 0,
                },
            ]
        );
    }

    #[test]
    fn nested_scopes_do_not_leak() {
        let tree = module(vec![overlap(
            "llap",
            name("A"),
            vec![
                overlap("rlap", name("B"), vec![assign(name("x"), integer(1))]),
                assign(name("y"), integer(2)),
            ],
        )]);

        let document = render(&tree).unwrap();
        assert_eq!(
            texts(&document),
            vec![
                "\\State{\\PyAssign{\\rlap{\\PyName{x}}\\hphantom{\\PyName{B}}}{\\PyNum{1}}}",
                "\\State{\\PyAssign{\\hphantom{\\PyName{A}}\\llap{\\PyName{y}}}{\\PyNum{2}}}",
            ]
        );
    }

    #[test]
    fn toggle_survives_scopes() {
        let tree = module(vec![
            overlap("rlap", name("D"), vec![directive("!hide")]),
            assign(name("x"), integer(1)),
            directive("!show"),
            assign(name("y"), integer(2)),
        ]);

        let document = render(&tree).unwrap();
        assert_eq!(
            texts(&document),
            vec!["\\State{\\PyAssign{\\PyName{y}}{\\PyNum{2}}}"]
        );
    }

    #[test]
    fn range_with_one_argument() {
        let tree = module(vec![Statement::For {
            target: name("i"),
            iter: call("range", vec![name("n")]),
            body: vec![],
            orelse: vec![],
        }]);

        let document = render(&tree).unwrap();
        assert_eq!(
            texts(&document),
            vec![
                "\\PyFor{\\PyName{i}}{\\PyNum{0}}{\\PyName{n}}{\\PyNum{1}}",
                "\\PyEndFor",
            ]
        );
    }

    #[test]
    fn range_with_two_and_three_arguments() {
        let tree = module(vec![
            Statement::For {
                target: name("i"),
                iter: call("range", vec![name("a"), name("b")]),
                body: vec![],
                orelse: vec![],
            },
            Statement::For {
                target: name("i"),
                iter: call("range", vec![name("a"), name("b"), name("c")]),
                body: vec![],
                orelse: vec![],
            },
        ]);

        let document = render(&tree).unwrap();
        assert_eq!(
            document.lines[0].text,
            "\\PyFor{\\PyName{i}}{\\PyName{a}}{\\PyName{b}}{\\PyNum{1}}"
        );
        assert_eq!(
            document.lines[2].text,
            "\\PyFor{\\PyName{i}}{\\PyName{a}}{\\PyName{b}}{\\PyName{c}}"
        );
    }

    #[test]
    fn loop_else_and_while() {
        let tree = module(vec![
            Statement::For {
                target: name("i"),
                iter: call("range", vec![name("n")]),
                body: vec![Statement::Expression {
                    value: call("visit", vec![name("i")]),
                }],
                orelse: vec![directive("exhausted")],
            },
            Statement::While {
                test: Expression::Compare {
                    left: Box::new(name("a")),
                    ops: vec![CompareOperator::Lt, CompareOperator::Lt],
                    comparators: vec![name("b"), name("c")],
                },
                body: vec![assign(name("a"), integer(0))],
            },
        ]);

        let document = render(&tree).unwrap();
        assert_eq!(
            document.to_string(),
            trim(
                r#"
\PyFor{\PyName{i}}{\PyNum{0}}{\PyName{n}}{\PyNum{1}}
  \State{\PyExpr{\PyCall{\PyName{visit}}{\PyName{i}}}}
\PyForElse
  \Comment{exhausted}
\PyEndFor
\While{\PyExpr{\PyName{a} \PyLt{} \PyName{b} \PyLt{} \PyName{c}}}
  \State{\PyAssign{\PyName{a}}{\PyNum{0}}}
\EndWhile%
"#
            )
        );
    }

    #[test]
    fn multiple_targets_and_declaration() {
        let tree = module(vec![
            Statement::Assignment {
                targets: vec![
                    name("a"),
                    Expression::Tuple {
                        elements: vec![name("b"), name("c")],
                    },
                ],
                value: integer(0),
            },
            Statement::Declaration {
                target: name("S"),
                annotation: string("visible faces"),
                value: None,
            },
        ]);

        let document = render(&tree).unwrap();
        assert_eq!(
            texts(&document),
            vec![
                "\\State{\\PyAssign{\\PyName{a}, \\PyName{b}, \\PyName{c}}{\\PyNum{0}}}",
                "\\State{\\PyAnnotation{\\PyName{S}}{visible faces}}",
            ]
        );
    }

    #[test]
    fn nested_tuple_targets() {
        let pair = Expression::Tuple {
            elements: vec![
                Expression::Tuple {
                    elements: vec![name("i"), name("j")],
                },
                name("k"),
            ],
        };
        let tree = module(vec![
            Statement::Assignment {
                targets: vec![pair.clone()],
                value: integer(1),
            },
            Statement::For {
                target: pair,
                iter: call("range", vec![name("n")]),
                body: vec![],
                orelse: vec![],
            },
        ]);

        let document = render(&tree).unwrap();
        assert_eq!(
            texts(&document),
            vec![
                "\\State{\\PyAssign{\\PyName{i}, \\PyName{j}, \\PyName{k}}{\\PyNum{1}}}",
                "\\PyFor{\\PyName{i}, \\PyName{j}, \\PyName{k}}{\\PyNum{0}}{\\PyName{n}}{\\PyNum{1}}",
                "\\PyEndFor",
            ]
        );
    }

    #[test]
    fn hidden_conditional_chain_skipped() {
        let tree = module(vec![
            directive("!hide"),
            Statement::If {
                test: name("a"),
                body: vec![assign(name("x"), integer(1))],
                orelse: vec![Statement::If {
                    test: name("b"),
                    body: vec![directive("!show")],
                    orelse: vec![],
                }],
            },
            assign(name("y"), integer(2)),
        ]);

        // the !show inside the skipped chain is never seen
        let document = render(&tree).unwrap();
        assert!(document.is_empty());
    }

    #[test]
    fn verbatim_passthrough_while_hidden() {
        let tree = module(vec![
            directive("!hide"),
            directive("!tex\\Require{Graph $G$}"),
            directive("not shown"),
        ]);

        let document = render(&tree).unwrap();
        assert_eq!(texts(&document), vec!["\\Require{Graph $G$}"]);
    }

    #[test]
    fn rendering_is_repeatable() {
        let tree = module(vec![
            directive("!hide"),
            directive("!show"),
            assign(name("x"), string("text")),
        ]);

        let first = render(&tree).unwrap();
        let second = render(&tree).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first.to_string(),
            "\\State{\\PyAssign{\\PyName{x}}{{text}}}\n"
        );
    }
}
