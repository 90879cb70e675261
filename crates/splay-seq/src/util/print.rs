use crate::node::SeqNode;
use crate::types::Element;

/// Debug printer for sequence trees.
///
/// Values are printed as stored, so a node with pending state shows the
/// value it had before that state is pushed down.
pub fn print<T: Element>(arena: &[SeqNode<T>], node: Option<u32>, tab: &str) -> String {
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let left = print(arena, n.l, &format!("{tab}  "));
            let right = print(arena, n.r, &format!("{tab}  "));
            let pending = if n.pushed_down {
                String::new()
            } else {
                let mut parts = Vec::new();
                if n.lazy.reverse {
                    parts.push("rev".to_string());
                }
                if let Some(x) = n.lazy.assign {
                    parts.push(format!("={x:?}"));
                }
                if !n.lazy.add.is_zero() {
                    parts.push(format!("+{:?}", n.lazy.add));
                }
                format!(" <{}>", parts.join(" "))
            };
            format!(
                "Node[{i}] [size={}] {{ {:?} }}{pending}\n{tab}L={left}\n{tab}R={right}",
                n.agg.size, n.value
            )
        }
    }
}
