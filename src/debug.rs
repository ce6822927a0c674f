use core::fmt;
use std::collections::VecDeque;

use cordyceps::Linked;

use crate::{Color, Link, Node, RbTree};

impl<T: Ord> RbTree<T> {
    /// Writes the tree as a Graphviz digraph, one `rank=same` row per level.
    ///
    /// Red nodes are drawn red; sentinel leaf positions are drawn as points.
    pub fn dotgraph<W>(&self, name: &str, mut w: W) -> fmt::Result
    where
        W: fmt::Write,
        T: fmt::Display,
    {
        if self.root == self.sentinel {
            return write!(w, "digraph \"graph-{name}\" {{}}");
        }

        enum Item<T> {
            Node(u32, Link<T>),
            Missing(u32),
        }

        let mut queue = VecDeque::new();
        queue.push_back(Item::Node(0, self.root));

        write!(
            w,
            "digraph \"graph-{name}\" {{\n subgraph \"subgraph-{name}\" {{"
        )?;

        // Nodes are identified by breadth-first index rather than value,
        // since equal values may appear more than once.
        let mut next_id = 1;
        let mut missing = 0;
        let mut links = String::new();

        while !queue.is_empty() {
            use fmt::Write;

            let remaining = queue.len();
            write!(w, "{{rank=same; ")?;

            for _ in 0..remaining {
                let (id, node) = match queue.pop_front().unwrap() {
                    Item::Node(id, node) => (id, node),
                    Item::Missing(id) => {
                        write!(w, "\"graph{name}-missing{id}\" [shape=point]; ")?;
                        continue;
                    }
                };

                let (value, color) = unsafe {
                    let node = node.as_ref();
                    (
                        node.value().expect("live node carries a value"),
                        node.color(),
                    )
                };
                let stroke = match color {
                    Color::Red => "red",
                    Color::Black => "black",
                };
                write!(
                    w,
                    "\"graph{name}-{id}\" [label=\"{value} ({color:?})\", color={stroke}]; "
                )?;

                let children = unsafe {
                    let links = Node::links(node).as_ref();
                    [links.left(), links.right()]
                };

                for child in children {
                    if child != self.sentinel {
                        let child_id = next_id;
                        next_id += 1;

                        queue.push_back(Item::Node(child_id, child));
                        writeln!(
                            links,
                            "\"graph{name}-{id}\" -> \"graph{name}-{child_id}\";"
                        )?;
                    } else {
                        queue.push_back(Item::Missing(missing));
                        writeln!(
                            links,
                            "\"graph{name}-{id}\" -> \"graph{name}-missing{missing}\";"
                        )?;
                        missing += 1;
                    }
                }
            }

            writeln!(w, "}}")?;
        }

        w.write_str(&links)?;

        w.write_str(" }\n}")
    }
}
