use super::*;

fn site(id: &str, name: Option<&str>, status: Option<&str>) -> Website {
    Website {
        id: id.to_owned(),
        url: format!("https://{id}.example"),
        name: name.map(str::to_owned),
        status: status.map(str::to_owned),
        uptime_percent: None,
        last_checked_at: None,
    }
}

#[test]
fn down_sites_sort_first() {
    let ordered = order_websites(vec![
        site("a", None, Some("up")),
        site("b", None, Some("down")),
        site("c", None, None),
    ]);
    let ids: Vec<&str> = ordered.iter().map(|w| w.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "c", "a"]);
}

#[test]
fn groups_sort_by_display_name() {
    let ordered = order_websites(vec![
        site("one", Some("Zeta"), Some("up")),
        site("two", Some("Alpha"), Some("up")),
    ]);
    assert_eq!(ordered[0].display_name(), "Alpha");
    assert_eq!(ordered[1].display_name(), "Zeta");
}

#[test]
fn order_is_stable_for_empty_and_single() {
    assert!(order_websites(Vec::new()).is_empty());
    let one = order_websites(vec![site("solo", None, None)]);
    assert_eq!(one.len(), 1);
}
