use edgeroute_core::graph::Route;
use edgeroute_core::records::field;

/// Output in records format
pub fn output_records(route: &Route) {
    for line in render_records(route) {
        println!("{}", line);
    }
}

fn render_records(route: &Route) -> Vec<String> {
    let mut lines = Vec::with_capacity(1 + route.names.len() + route.hops.len());

    lines.push(format!(
        "H edgeroute=1 records=1 mode=route from={} to={} found=true length={} cost={}",
        field(route.start()),
        field(route.end()),
        route.len(),
        route.total_cost
    ));

    for name in &route.names {
        lines.push(format!("N {}", field(name)));
    }
    for hop in &route.hops {
        lines.push(format!(
            "E {} {} {}",
            field(&hop.from),
            field(&hop.to),
            hop.weight
        ));
    }

    lines
}
