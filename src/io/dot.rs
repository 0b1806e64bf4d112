//! Graphviz (`.dot`) dump of a history graph.
//!
//! Layout conventions:
//! - one vertex `N<index>` per node, labelled with the reference and the op id,
//! - roots are drawn as `doublecircle`, deleted nodes `dashed`, active nodes `bold`,
//! - `modified` edges are solid, `generated` edges dotted.

use std::fmt::Display;
use std::io::Write;

use itertools::Itertools;

use crate::history::HistoryGraph;
use crate::history_error::HistoryError;
use crate::topology::identity::Identified;

#[derive(Debug, Clone)]
pub struct DotOptions {
    /// Name after the `digraph` keyword; written as a quoted ID.
    pub graph_name: String,
    /// Append `op <id>` to each vertex label.
    pub show_ops: bool,
    /// Graphviz `rankdir` (`TB`, `LR`, ...).
    pub rankdir: String,
}

impl Default for DotOptions {
    fn default() -> Self {
        Self {
            graph_name: "history".to_string(),
            show_ops: true,
            rankdir: "LR".to_string(),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct DotWriter {
    pub options: DotOptions,
}

impl DotWriter {
    pub fn new(options: DotOptions) -> Self {
        Self { options }
    }

    fn escape(label: &str) -> String {
        label.replace('\\', "\\\\").replace('"', "\\\"")
    }

    pub fn write<S, W>(&self, graph: &HistoryGraph<S>, mut writer: W) -> Result<(), HistoryError>
    where
        S: Identified + Clone + Display,
        W: Write,
    {
        let opts = &self.options;
        writeln!(writer, "digraph \"{}\" {{", Self::escape(&opts.graph_name))?;
        writeln!(writer, "  rankdir={};", opts.rankdir)?;

        for (id, node, shape) in graph.iter() {
            let mut label = Self::escape(&shape.to_string());
            if opts.show_ops {
                label.push_str(&format!("\\nop {}", node.op()));
            }
            let mut attrs = vec![format!("label=\"{label}\"")];
            if graph.store().is_root(id) {
                attrs.push("shape=doublecircle".to_string());
            }
            let style = [
                node.is_deleted().then_some("dashed"),
                node.is_active().then_some("bold"),
            ]
            .into_iter()
            .flatten()
            .join(",");
            if !style.is_empty() {
                attrs.push(format!("style=\"{style}\""));
            }
            writeln!(writer, "  N{} [{}];", id.get(), attrs.join(", "))?;
        }

        for (id, node, _) in graph.iter() {
            for child in node.modified() {
                writeln!(writer, "  N{} -> N{};", id.get(), child.get())?;
            }
            for child in node.generated() {
                writeln!(writer, "  N{} -> N{} [style=dotted];", id.get(), child.get())?;
            }
        }
        writeln!(writer, "}}")?;
        Ok(())
    }

    /// Convenience: render to a `String`.
    pub fn render<S>(&self, graph: &HistoryGraph<S>) -> Result<String, HistoryError>
    where
        S: Identified + Clone + Display,
    {
        let mut buf = Vec::new();
        self.write(graph, &mut buf)?;
        String::from_utf8(buf).map_err(|e| HistoryError::Io(e.to_string()))
    }
}
