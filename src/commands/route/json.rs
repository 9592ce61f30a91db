use edgeroute_core::error::Result;
use edgeroute_core::graph::Route;

/// Output in JSON format
pub fn output_json(route: &Route) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&route_json(route))?);
    Ok(())
}

fn route_json(route: &Route) -> serde_json::Value {
    serde_json::json!({
        "start": route.start(),
        "end": route.end(),
        "cost": route.total_cost,
        "path": route.names,
        "hops": route.hops,
    })
}
