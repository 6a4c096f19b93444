use serde::Serialize;

use crate::poset::Poset;
use crate::relation::Relation;

/// Node labels and covering edges, oriented from the lesser element to the greater one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphDescription {
  pub nodes: Vec<String>,
  pub edges: Vec<(usize, usize)>,
}

pub trait GraphRenderer {
  type Output;
  fn render(&self, graph: &GraphDescription) -> Self::Output;
}

/// Graphviz source with the least elements at the bottom.
pub struct DotRenderer {
  pub background: String,
  pub fill: String,
}

impl Default for DotRenderer {
  fn default() -> Self {
    Self {
      background: "#00000000".to_string(),
      fill: "#ffffffff".to_string(),
    }
  }
}

fn quote(text: &str) -> String {
  serde_json::Value::from(text).to_string()
}

impl GraphRenderer for DotRenderer {
  type Output = String;
  fn render(&self, graph: &GraphDescription) -> String {
    let mut code = String::from("digraph G {\n");
    code += &format!("    graph [ rankdir = BT, bgcolor = {} ]\n", quote(&self.background));
    code += &format!("    node [ shape = circle, style = filled, fillcolor = {} ]\n", quote(&self.fill));
    for (i, label) in graph.nodes.iter().enumerate() {
      code += &format!("    {} [ label = {} ]\n", i, quote(label));
    }
    for (lower, upper) in graph.edges.iter() {
      code += &format!("    {} -> {}\n", lower, upper);
    }
    code += "}\n";
    code
  }
}

impl<R: Relation> Poset<R> {
  pub fn graph(&self) -> GraphDescription {
    GraphDescription {
      nodes: self.elements().to_vec(),
      edges: self.generators().to_vec(),
    }
  }

  pub fn to_dot(&self) -> String {
    DotRenderer::default().render(&self.graph())
  }
}
