//! Pseudocode renderer for the statement level of the notation

use std::fmt;

use tracing::debug;

use crate::error::RenderingError;
use crate::language::*;
use crate::rendering::expression::{render_expression, render_target, render_wrapped};
use crate::rendering::symbols::symbolify;

/// Repeated once per level of nesting at the start of each line.
pub static INDENT: &str = "  ";

// directive strings
static VERBATIM: &str = "!tex";
static SHOW: &str = "!show";
static HIDE: &str = "!hide";

// scope forms recognized in a scoped block
static LEADING: &str = "llap";
static TRAILING: &str = "rlap";
static PHANTOM: &str = "phantom";

/// Render a syntax tree into a pseudocode document.
pub fn render(module: &Module) -> Result<Document, RenderingError> {
    let mut output = Renderer::new();
    output.append_module(module)?;

    debug!("Rendered {} lines", output.lines.len());
    Ok(Document {
        lines: output.lines,
    })
}

/// One line of output, along with how deeply it is nested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub depth: usize,
}

/// The rendered result; the lines in the order they were emitted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub lines: Vec<Line>,
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.lines
            .is_empty()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}{}", INDENT.repeat(line.depth), line.text)?;
        }
        Ok(())
    }
}

/// How assignment targets overlap the placeholder within a scoped block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlap {
    #[default]
    None,
    Leading,
    Trailing,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Flags {
    pub overlap: Overlap,
    pub phantom: Option<String>,
}

struct Renderer {
    lines: Vec<Line>,
    nesting: usize,
    visible: bool,
    flags: Flags,
}

impl Renderer {
    fn new() -> Renderer {
        Renderer {
            lines: Vec::new(),
            nesting: 0,
            visible: true,
            flags: Flags::default(),
        }
    }

    fn line(&mut self, text: impl Into<String>) {
        self.lines
            .push(Line {
                text: text.into(),
                depth: self.nesting,
            });
    }

    fn append_module(&mut self, module: &Module) -> Result<(), RenderingError> {
        for statement in &module.body {
            self.append_statement(statement)?;
        }
        Ok(())
    }

    fn append_body(&mut self, body: &[Statement]) -> Result<(), RenderingError> {
        self.nesting += 1;
        let result = body
            .iter()
            .try_for_each(|statement| self.append_statement(statement));
        self.nesting -= 1;
        result
    }

    fn append_statement(&mut self, statement: &Statement) -> Result<(), RenderingError> {
        match statement {
            Statement::Definition(definition) => self.append_definition(definition),
            Statement::Assignment { targets, value } => self.append_assignment(targets, value),
            Statement::Declaration {
                target,
                annotation,
                value,
            } => self.append_declaration(target, annotation, value.as_ref()),
            Statement::Expression { value } => self.append_expression(value),
            Statement::For {
                target,
                iter,
                body,
                orelse,
            } => self.append_for(target, iter, body, orelse),
            Statement::While { test, body } => self.append_while(test, body),
            Statement::If { test, body, orelse } => self.append_conditional(test, body, orelse, false),
            Statement::Return { value } => self.append_return(value.as_ref()),
            Statement::Scoped { items, body } => self.append_scoped(items, body),
        }
    }

    fn append_definition(&mut self, definition: &Definition) -> Result<(), RenderingError> {
        if !self.visible {
            return Ok(());
        }

        let parameters = definition
            .parameters
            .iter()
            .map(render_parameter)
            .collect::<Result<Vec<_>, _>>()?
            .join("\\PyArgSep");

        match &definition.returns {
            Some(returns) => {
                let returns = annotation_text(returns, "return type")?;
                self.line(format!(
                    "\\Function{{{}}}{{{}}}{{ $\\rightarrow$ \\texttt{{{}}}}}",
                    definition.name, parameters, returns
                ));
                self.append_body(&definition.body)?;
                self.line("\\EndFunction%");
            }
            None => {
                self.line(format!(
                    "\\Procedure{{{}}}{{{}}}",
                    definition.name, parameters
                ));
                self.append_body(&definition.body)?;
                self.line("\\EndProcedure%");
            }
        }
        Ok(())
    }

    fn append_assignment(
        &mut self,
        targets: &[Expression],
        value: &Expression,
    ) -> Result<(), RenderingError> {
        if !self.visible {
            return Ok(());
        }

        let targets = targets
            .iter()
            .map(render_target)
            .collect::<Result<Vec<_>, _>>()?
            .join(", ");
        let value = render_expression(value)?;

        let targets = match self
            .flags
            .overlap
        {
            Overlap::None => targets,
            Overlap::Leading => format!("\\hphantom{{{}}}\\llap{{{}}}", self.phantom()?, targets),
            Overlap::Trailing => format!("\\rlap{{{}}}\\hphantom{{{}}}", targets, self.phantom()?),
        };

        self.line(format!("\\State{{\\PyAssign{{{}}}{{{}}}}}", targets, value));
        Ok(())
    }

    fn phantom(&self) -> Result<&str, RenderingError> {
        self.flags
            .phantom
            .as_deref()
            .ok_or(RenderingError::MissingPhantom)
    }

    fn append_declaration(
        &mut self,
        target: &Expression,
        annotation: &Expression,
        value: Option<&Expression>,
    ) -> Result<(), RenderingError> {
        if !self.visible {
            return Ok(());
        }

        if value.is_some() {
            return Err(RenderingError::MalformedAnnotation(
                "an annotated declaration cannot also assign a value".to_string(),
            ));
        }

        let target = render_expression(target)?;
        let annotation = annotation_text(annotation, "declaration")?;

        self.line(format!(
            "\\State{{\\PyAnnotation{{{}}}{{{}}}}}",
            target, annotation
        ));
        Ok(())
    }

    fn append_expression(&mut self, expression: &Expression) -> Result<(), RenderingError> {
        if let Some(text) = expression.as_literal() {
            self.append_directive(text);
            return Ok(());
        }

        if !self.visible {
            return Ok(());
        }

        let expression = render_wrapped(expression)?;
        self.line(format!("\\State{{{}}}", expression));
        Ok(())
    }

    /// Bare strings in statement position are instructions to the renderer
    /// rather than content: raw passthrough, toggling output, or comments.
    fn append_directive(&mut self, text: &str) {
        if let Some(raw) = text.strip_prefix(VERBATIM) {
            for line in raw.lines() {
                self.line(line);
            }
        } else if text == SHOW {
            debug!("Output visible");
            self.visible = true;
        } else if text == HIDE {
            debug!("Output hidden");
            self.visible = false;
        } else if self.visible {
            self.line(format!("\\Comment{{{}}}", text));
        }
    }

    fn append_for(
        &mut self,
        target: &Expression,
        iter: &Expression,
        body: &[Statement],
        orelse: &[Statement],
    ) -> Result<(), RenderingError> {
        if !self.visible {
            return Ok(());
        }

        let arguments = range_arguments(iter)?
            .iter()
            .map(render_expression)
            .collect::<Result<Vec<_>, _>>()?;

        let (start, stop, step) = match arguments.as_slice() {
            [stop] => ("\\PyNum{0}".to_string(), stop.clone(), "\\PyNum{1}".to_string()),
            [start, stop] => (start.clone(), stop.clone(), "\\PyNum{1}".to_string()),
            [start, stop, step] => (start.clone(), stop.clone(), step.clone()),
            _ => {
                return Err(RenderingError::UnsupportedConstruct(format!(
                    "range() with {} arguments",
                    arguments.len()
                )))
            }
        };

        let variable = render_target(target)?;

        self.line(format!(
            "\\PyFor{{{}}}{{{}}}{{{}}}{{{}}}",
            variable, start, stop, step
        ));
        self.append_body(body)?;
        if !orelse.is_empty() {
            self.line("\\PyForElse");
            self.append_body(orelse)?;
        }
        self.line("\\PyEndFor");
        Ok(())
    }

    fn append_while(&mut self, test: &Expression, body: &[Statement]) -> Result<(), RenderingError> {
        if !self.visible {
            return Ok(());
        }

        self.line(format!("\\While{{{}}}", render_wrapped(test)?));
        self.append_body(body)?;
        self.line("\\EndWhile%");
        Ok(())
    }

    fn append_conditional(
        &mut self,
        test: &Expression,
        body: &[Statement],
        orelse: &[Statement],
        chained: bool,
    ) -> Result<(), RenderingError> {
        if !chained && !self.visible {
            return Ok(());
        }

        let keyword = if chained { "\\ElsIf" } else { "\\If" };
        self.line(format!("{}{{{}}}", keyword, render_wrapped(test)?));
        self.append_body(body)?;

        match orelse {
            [Statement::If {
                test,
                body,
                orelse,
            }] => {
                self.append_conditional(test, body, orelse, true)?;
            }
            [] => {}
            _ => {
                self.line("\\Else%");
                self.append_body(orelse)?;
            }
        }

        // only the head of an If/ElsIf chain closes it
        if !chained {
            self.line("\\EndIf%");
        }
        Ok(())
    }

    fn append_return(&mut self, value: Option<&Expression>) -> Result<(), RenderingError> {
        if !self.visible {
            return Ok(());
        }

        let value = match value {
            Some(value) => render_wrapped(value)?,
            None => String::new(),
        };
        self.line(format!("\\Return{{{}}}", value));
        Ok(())
    }

    fn append_scoped(
        &mut self,
        items: &[Expression],
        body: &[Statement],
    ) -> Result<(), RenderingError> {
        let mut flags = self
            .flags
            .clone();

        for item in items {
            let (name, keywords) = match item {
                Expression::Call {
                    func,
                    args,
                    keywords,
                } if args.is_empty() => match func.as_name() {
                    Some(name) => (name, keywords),
                    None => return Err(unsupported_scope("a scope form must be a plain name")),
                },
                _ => return Err(unsupported_scope("a scope form must be a call with keywords")),
            };

            flags.overlap = if name == LEADING {
                Overlap::Leading
            } else if name == TRAILING {
                Overlap::Trailing
            } else {
                return Err(unsupported_scope(&format!("unknown scope form '{}'", name)));
            };

            let mut phantom = None;
            for keyword in keywords {
                match keyword.arg.as_deref() {
                    Some(arg) if arg == PHANTOM => {
                        phantom = Some(render_expression(&keyword.value)?);
                    }
                    Some(arg) => {
                        return Err(unsupported_scope(&format!(
                            "unknown argument '{}' to {}()",
                            arg, name
                        )))
                    }
                    None => {
                        return Err(unsupported_scope(&format!(
                            "unpacked arguments to {}()",
                            name
                        )))
                    }
                }
            }

            match phantom {
                Some(text) => flags.phantom = Some(text),
                None => {
                    return Err(unsupported_scope(&format!(
                        "{}() requires a '{}' argument",
                        name, PHANTOM
                    )))
                }
            }
        }

        debug!(?flags, "Entering scoped block");

        // the enclosing flags come back whether or not the body rendered
        let saved = std::mem::replace(&mut self.flags, flags);
        let result = self.append_body(body);
        self.flags = saved;

        result
    }
}

fn render_parameter(parameter: &Parameter) -> Result<String, RenderingError> {
    let name = symbolify(&parameter.name);
    match &parameter.annotation {
        None => Ok(format!("\\PyArg{{{}}}", name)),
        Some(annotation) => {
            let annotation = annotation_text(annotation, "parameter")?;
            Ok(format!("\\PyArgAnnotation{{{}}}{{{}}}", name, annotation))
        }
    }
}

fn annotation_text<'a>(annotation: &'a Expression, what: &str) -> Result<&'a str, RenderingError> {
    annotation
        .as_literal()
        .ok_or_else(|| {
            RenderingError::MalformedAnnotation(format!(
                "the annotation on a {} must be a literal string",
                what
            ))
        })
}

/// Loops are only over `range()`, so extract the arguments thereof.
fn range_arguments(iter: &Expression) -> Result<&[Expression], RenderingError> {
    match iter {
        Expression::Call {
            func,
            args,
            keywords,
        } if func.as_name() == Some("range") && keywords.is_empty() => Ok(args.as_slice()),
        _ => Err(RenderingError::UnsupportedConstruct(
            "a for loop can only iterate over range()".to_string(),
        )),
    }
}

fn unsupported_scope(what: &str) -> RenderingError {
    RenderingError::UnsupportedConstruct(what.to_string())
}
