//! Rendering of expressions into inline typesetting macros

use crate::error::RenderingError;
use crate::language::*;
use crate::rendering::symbols::symbolify;

/// Callee used purely to group its single argument in parentheses.
static GROUPING: &str = "_";

/// Comprehension target meaning "the element itself".
static DISCARD: &str = "_";

/// Render an expression to inline markup. This is pure: the same expression
/// always results in the same text.
pub fn render_expression(expression: &Expression) -> Result<String, RenderingError> {
    match expression {
        Expression::String { value } => Ok(format!("{{{}}}", value)),
        Expression::Number { value } => Ok(format!("\\PyNum{{{}}}", render_numeric(value))),
        Expression::Constant { value } => Ok(format!("\\Py{}{{}}", value.name())),
        Expression::Name { id } => Ok(format!("\\PyName{{{}}}", symbolify(id))),
        Expression::List { elements } => Ok(format!("\\PyList{{{}}}", render_elements(elements)?)),
        Expression::Tuple { elements } => {
            let inner = render_elements(elements)?;
            if elements.len() == 1 {
                Ok(format!("({{{}}},)", inner))
            } else {
                Ok(format!("({{{}}})", inner))
            }
        }
        Expression::Set { elements } => Ok(format!("$\\{{${}$\\}}$", render_elements(elements)?)),
        Expression::SetComprehension {
            element,
            generators,
        } => render_comprehension(element, generators),
        Expression::Unary { op, operand } => Ok(format!(
            "\\Py{}{{{}}}",
            op.name(),
            render_expression(operand)?
        )),
        Expression::Binary { left, op, right } => {
            let left = render_expression(left)?;
            let right = render_expression(right)?;
            match op {
                // concatenation splices text together without any markup
                BinaryOperator::MatMult => Ok(left + &right),
                _ => Ok(format!("\\Py{}{{{}}}{{{}}}", op.name(), left, right)),
            }
        }
        Expression::Boolean { op, values } => {
            if values.len() < 2 {
                return Err(RenderingError::UnsupportedConstruct(format!(
                    "boolean {} over {} operand(s)",
                    op.name(),
                    values.len()
                )));
            }
            let separator = format!(" \\Py{}{{}} ", op.name());
            let operands = values
                .iter()
                .map(render_expression)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(operands.join(&separator))
        }
        Expression::Compare {
            left,
            ops,
            comparators,
        } => render_comparison(left, ops, comparators),
        Expression::Subscript { value, index } => Ok(format!(
            "\\PySubscript{{{}}}{{{}}}",
            render_expression(value)?,
            render_expression(index)?
        )),
        Expression::Call {
            func,
            args,
            keywords,
        } => render_call(func, args, keywords),
    }
}

/// Render an expression in the position of an assignment or loop target,
/// where a tuple unpacks into bare comma separated names, however deeply
/// the tuples are nested.
pub fn render_target(target: &Expression) -> Result<String, RenderingError> {
    match target {
        Expression::Tuple { elements } => {
            let rendered = elements
                .iter()
                .map(render_target)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(rendered.join(", "))
        }
        _ => render_expression(target),
    }
}

/// Render an expression wrapped for use as a whole statement or condition.
pub fn render_wrapped(expression: &Expression) -> Result<String, RenderingError> {
    Ok(format!("\\PyExpr{{{}}}", render_expression(expression)?))
}

fn render_numeric(numeric: &Numeric) -> String {
    match numeric {
        Numeric::Integral(value) => value.to_string(),
        Numeric::Real(value) => render_real(*value),
    }
}

/// Reals read the way they were written in the source notation: whole
/// values keep ".0", and very large or very small magnitudes switch to an
/// exponent that is signed and at least two digits wide.
fn render_real(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if value != 0.0 && !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", mantissa, sign, exponent.abs());
    }

    let decimal = value.to_string();
    if decimal.contains('.') {
        decimal
    } else {
        decimal + ".0"
    }
}

fn render_elements(elements: &[Expression]) -> Result<String, RenderingError> {
    let rendered = elements
        .iter()
        .map(render_expression)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rendered.join(", "))
}

fn render_call(
    func: &Expression,
    args: &[Expression],
    keywords: &[Keyword],
) -> Result<String, RenderingError> {
    if !keywords.is_empty() {
        return Err(RenderingError::UnsupportedConstruct(
            "keyword arguments in a call".to_string(),
        ));
    }

    if func.as_name() == Some(GROUPING) {
        return match args {
            [arg] => Ok(format!("\\PyPar{{{}}}", render_expression(arg)?)),
            _ => Err(RenderingError::UnsupportedConstruct(format!(
                "grouping call with {} arguments",
                args.len()
            ))),
        };
    }

    Ok(format!(
        "\\PyCall{{{}}}{{{}}}",
        render_expression(func)?,
        render_elements(args)?
    ))
}

fn render_comparison(
    left: &Expression,
    ops: &[CompareOperator],
    comparators: &[Expression],
) -> Result<String, RenderingError> {
    if ops.is_empty() || ops.len() != comparators.len() {
        return Err(RenderingError::UnsupportedConstruct(format!(
            "comparison with {} operator(s) and {} operand(s)",
            ops.len(),
            comparators.len()
        )));
    }

    let mut result = render_expression(left)?;
    for (op, right) in ops
        .iter()
        .zip(comparators)
    {
        result.push_str(" \\Py");
        result.push_str(op.name());
        result.push_str("{} ");
        result.push_str(&render_expression(right)?);
    }
    Ok(result)
}

fn render_comprehension(
    element: &Expression,
    generators: &[Generator],
) -> Result<String, RenderingError> {
    let generator = match generators {
        [generator] => generator,
        _ => {
            return Err(RenderingError::InvalidComprehensionShape(format!(
                "expected exactly one generator, found {}",
                generators.len()
            )))
        }
    };

    let rhs = render_expression(element)?;
    let target = if generator
        .target
        .as_name()
        == Some(DISCARD)
    {
        rhs.clone()
    } else {
        render_target(&generator.target)?
    };

    let mut clauses = vec![format!(
        "{} $\\in$ {}",
        target,
        render_expression(&generator.iter)?
    )];
    for condition in &generator.ifs {
        clauses.push(render_expression(condition)?);
    }

    Ok(format!("$\\{{${} $:$ {}$\\}}$", clauses.join(", "), rhs))
}
