use crate::{error, graph::PathFinder, success, warning};

pub async fn path(from: String, to: String, max_depth: u32) {
    let graph = super::load_graph().await;
    let mut finder = PathFinder::new(graph);

    match finder.find_path(&from, &to, max_depth).await {
        Ok(Some(path)) => {
            success!("Found a path with {} hop(s)!", path.hops());
            println!("{}", path);
        }
        Ok(None) => {
            warning!(
                "No path found between {} and {} within {} hops.",
                from,
                to,
                max_depth
            );
        }
        Err(e) => {
            error!("Path search failed: {}", e);
        }
    }
}
