use ascii_railroad::{
    render_grammar, DiagramBuilder, LayoutContext, LayoutNode, RenderError, RenderOptions, Rule,
    TlineShape,
};

/// A tiny grammar expression language, just enough to drive the renderer.
#[derive(Debug, Clone)]
enum Expr {
    Lit(&'static str),
    LitCi(&'static str),
    Ref(&'static str),
    Prose(&'static str),
    Seq(Vec<Expr>),
    Alt(Vec<Expr>),
    Opt(Box<Expr>),
    Many(Box<Expr>),
    Note(Box<Expr>, &'static str),
    Etc,
}

struct Builder;

impl Builder {
    fn alternatives(&self, branches: Vec<LayoutNode>) -> LayoutNode {
        let n = branches.len();
        let connectors = (0..n)
            .map(|i| match i {
                0 => TlineShape::D,
                i if i + 1 == n => TlineShape::E,
                _ => TlineShape::LowerD,
            })
            .collect();
        LayoutNode::vlist(branches, connectors, 0)
    }
}

impl DiagramBuilder for Builder {
    type Rule = Expr;
    type Graph = Expr;
    type Error = &'static str;

    fn build_graph(&self, rule: &Expr) -> Result<Expr, &'static str> {
        match rule {
            Expr::Alt(items) | Expr::Seq(items) if items.is_empty() => Err("empty group"),
            other => Ok(other.clone()),
        }
    }

    fn simplify(&self, graph: Expr) -> Expr {
        match graph {
            Expr::Seq(mut items) | Expr::Alt(mut items) if items.len() == 1 => {
                self.simplify(items.remove(0))
            }
            Expr::Seq(items) => Expr::Seq(items.into_iter().map(|e| self.simplify(e)).collect()),
            Expr::Alt(items) => Expr::Alt(items.into_iter().map(|e| self.simplify(e)).collect()),
            other => other,
        }
    }

    fn to_layout_tree(&self, graph: &Expr, ctx: &LayoutContext<'_>) -> LayoutNode {
        match graph {
            Expr::Lit(s) => LayoutNode::literal_cs(*s, ctx.oracle),
            Expr::LitCi(s) => LayoutNode::literal_ci(*s, ctx.oracle),
            Expr::Ref(s) => LayoutNode::name(*s, ctx.oracle),
            Expr::Prose(s) => LayoutNode::prose(*s, ctx.oracle),
            Expr::Seq(items) => {
                LayoutNode::hlist(items.iter().map(|e| self.to_layout_tree(e, ctx)).collect())
            }
            Expr::Alt(items) => {
                let branches = items.iter().map(|e| self.to_layout_tree(e, ctx)).collect();
                self.alternatives(branches)
            }
            Expr::Opt(body) => {
                self.alternatives(vec![LayoutNode::skip(), self.to_layout_tree(body, ctx)])
            }
            Expr::Many(body) => LayoutNode::vlist(
                vec![LayoutNode::arrow_left(), self.to_layout_tree(body, ctx)],
                vec![TlineShape::B, TlineShape::LowerA],
                1,
            ),
            Expr::Note(body, text) => LayoutNode::comment(self.to_layout_tree(body, ctx), *text),
            Expr::Etc => LayoutNode::ellipsis(),
        }
    }
}

fn print_grammar(rules: &[Rule<Expr>], options: RenderOptions) -> Result<(), RenderError> {
    let mut out = String::new();
    let result = render_grammar(rules, &Builder, &options, &mut out);
    print!("{out}");
    result
}

fn main() -> Result<(), RenderError> {
    println!("=== Railroad Diagram Examples ===\n");

    // Example 1: Sequence and alternation
    println!("1. Sequence and Alternation:\n");
    print_grammar(
        &[
            Rule::new(
                "stmt",
                Expr::Seq(vec![
                    Expr::LitCi("print"),
                    Expr::Alt(vec![Expr::Ref("expr"), Expr::Ref("string"), Expr::Etc]),
                ]),
            ),
            Rule::new(
                "sign",
                Expr::Opt(Box::new(Expr::Alt(vec![Expr::Lit("+"), Expr::Lit("-")]))),
            ),
        ],
        RenderOptions::new(),
    )?;

    // Example 2: Repetition loops back above the main line
    println!("2. Repetition:\n");
    print_grammar(
        &[Rule::new(
            "digits",
            Expr::Many(Box::new(Expr::Prose("any decimal digit"))),
        )],
        RenderOptions::new(),
    )?;

    // Example 3: Comments and escaped literals
    println!("3. Comments and Escapes:\n");
    print_grammar(
        &[Rule::new(
            "line",
            Expr::Seq(vec![
                Expr::Note(Box::new(Expr::Ref("text")), "no newlines"),
                Expr::Lit("\r\n"),
            ]),
        )],
        RenderOptions::new(),
    )?;

    // Example 4: Prettify collapses single-element groups
    println!("4. Prettify:\n");
    let rules = [Rule::new(
        "wrapped",
        Expr::Seq(vec![Expr::Alt(vec![Expr::Ref("inner")])]),
    )];
    print_grammar(&rules, RenderOptions::new())?;
    print_grammar(&rules, RenderOptions::new().prettify(true))?;

    // Example 5: An empty group fails to build and stops the batch
    println!("5. Build Failure:\n");
    let rules = [
        Rule::new("first", Expr::Ref("ok")),
        Rule::new("broken", Expr::Alt(vec![])),
        Rule::new("never", Expr::Ref("printed")),
    ];
    if let Err(err) = print_grammar(&rules, RenderOptions::new()) {
        println!("error: {err}");
    }

    Ok(())
}
