use edgeroute_core::graph::Route;

/// Output in human-readable format
pub fn output_human(route: &Route, show_cost: bool) {
    print!("{}", render_human(route, show_cost));
}

fn render_human(route: &Route, show_cost: bool) -> String {
    let mut out = String::new();
    for name in &route.names {
        out.push_str(name);
        out.push('\n');
    }
    if show_cost {
        out.push_str(&format!("cost: {}\n", route.total_cost));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use edgeroute_core::graph::Hop;

    fn route() -> Route {
        Route {
            names: vec!["A".into(), "B".into()],
            hops: vec![Hop {
                from: "A".into(),
                to: "B".into(),
                weight: 4,
            }],
            total_cost: 4,
        }
    }

    #[test]
    fn test_one_name_per_line() {
        assert_eq!(render_human(&route(), false), "A\nB\n");
    }

    #[test]
    fn test_cost_line() {
        assert_eq!(render_human(&route(), true), "A\nB\ncost: 4\n");
    }
}
