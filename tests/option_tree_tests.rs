use chart_bridge::BridgeError;
use chart_bridge::api::{
    Color, DataLabels, FontWeight, Marker, MarkerSymbol, OptionBuilder, PlotOptions, SeriesType,
};
use chart_bridge::core::{ConfigValue, ContainerOverwritePolicy, OptionTree, TreeConfig};

#[test]
fn data_labels_paths_merge_into_one_container() {
    let mut tree = OptionTree::new();
    tree.set_option("/dataLabels/style/fontWeight", "bold")
        .expect("font weight");
    tree.set_option("/dataLabels/color", "#CC0000")
        .expect("color");

    let options = tree.get_options();
    let data_labels = options
        .get("dataLabels")
        .and_then(ConfigValue::as_container)
        .expect("dataLabels container");
    let style = data_labels
        .get("style")
        .and_then(ConfigValue::as_container)
        .expect("style container");

    assert_eq!(
        style.get("fontWeight").and_then(ConfigValue::as_str),
        Some("bold")
    );
    assert_eq!(
        data_labels.get("color").and_then(ConfigValue::as_str),
        Some("#CC0000")
    );
    assert_eq!(
        options.to_json_value(),
        serde_json::json!({
            "dataLabels": { "style": { "fontWeight": "bold" }, "color": "#CC0000" }
        })
    );
}

#[test]
fn disjoint_paths_do_not_interfere() {
    let mut tree = OptionTree::new();
    tree.set_option("/legend/enabled", false).expect("legend");
    tree.set_option("/credits/text", "acme").expect("credits");

    assert_eq!(
        tree.get("/legend/enabled").and_then(ConfigValue::as_bool),
        Some(false)
    );
    assert_eq!(
        tree.get("/credits/text").and_then(ConfigValue::as_str),
        Some("acme")
    );
}

#[test]
fn descending_through_scalar_is_a_configuration_error() {
    let mut tree = OptionTree::new();
    tree.set_option("/a", 5).expect("scalar");

    let err = tree.set_option("/a/b", 6).expect_err("must collide");
    match err {
        BridgeError::PathCollision { path, segment } => {
            assert_eq!(path, "/a/b");
            assert_eq!(segment, "a");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn container_overwrite_policy_is_explicit() {
    let mut replacing = OptionTree::new();
    replacing.set_option("/a/b", 1).expect("nested");
    replacing.set_option("/a", 2).expect("replace");
    assert_eq!(replacing.get("/a"), Some(&ConfigValue::from(2)));

    let mut rejecting = OptionTree::with_config(
        TreeConfig::default().with_container_overwrite(ContainerOverwritePolicy::Reject),
    );
    rejecting.set_option("/a/b", 1).expect("nested");
    assert!(matches!(
        rejecting.set_option("/a", 2),
        Err(BridgeError::PathCollision { .. })
    ));
    // A container may still replace a container.
    rejecting
        .set_option("/a", ConfigValue::Container(Default::default()))
        .expect("container over container");
    assert!(rejecting.get("/a/b").is_none());
}

#[test]
fn null_is_a_value_distinct_from_absence() {
    let mut tree = OptionTree::new();
    tree.set_option("/xAxis/min", None::<f64>).expect("null");

    assert!(tree.get("/xAxis/min").is_some_and(ConfigValue::is_null));
    assert!(tree.get("/xAxis/max").is_none());
    assert_eq!(
        tree.get_options().to_json_value(),
        serde_json::json!({ "xAxis": { "min": null } })
    );
}

#[test]
fn snapshot_is_isolated_from_later_writes() {
    let mut tree = OptionTree::new();
    tree.set_option("/title/text", "before").expect("title");
    let snapshot = tree.get_options();

    tree.set_option("/title/text", "after").expect("retitle");
    tree.set_option("/subtitle/text", "new").expect("subtitle");

    let title = snapshot
        .get("title")
        .and_then(ConfigValue::as_container)
        .and_then(|title| title.get("text"))
        .and_then(ConfigValue::as_str);
    assert_eq!(title, Some("before"));
    assert!(snapshot.get("subtitle").is_none());
}

#[test]
fn nested_builders_are_copied_on_set() {
    let mut marker = Marker::new();
    marker
        .set_enabled(true)
        .and_then(|m| m.set_symbol(MarkerSymbol::Diamond))
        .expect("marker");

    let mut labels = DataLabels::new();
    labels
        .set_font_weight(FontWeight::Bold)
        .and_then(|l| l.set_color(Color::hex("#CC0000")?))
        .expect("labels");

    let mut plot = PlotOptions::new(SeriesType::Line);
    plot.set_marker(&marker)
        .and_then(|p| p.set_data_labels(&labels))
        .expect("plot options");

    marker.set_radius(9.0).expect("late marker change");

    assert_eq!(
        plot.get_option("marker/symbol").and_then(ConfigValue::as_str),
        Some("diamond")
    );
    assert!(plot.get_option("marker/radius").is_none());
    assert_eq!(
        plot.get_option("dataLabels/style/fontWeight")
            .and_then(ConfigValue::as_str),
        Some("bold")
    );

    // Setting again refreshes the copy.
    plot.set_marker(&marker).expect("refresh");
    assert_eq!(
        plot.get_option("marker/radius").and_then(ConfigValue::as_f64),
        Some(9.0)
    );
}

#[test]
fn remove_option_restores_engine_default() {
    let mut labels = DataLabels::new();
    labels.set_enabled(true).expect("enabled");
    let removed = labels.remove_option("enabled").expect("valid path");
    assert_eq!(removed, Some(ConfigValue::from(true)));
    assert!(labels.get_options().is_empty());
}

#[test]
fn invalid_paths_are_rejected() {
    let mut tree = OptionTree::new();
    assert!(matches!(
        tree.set_option("//", 1),
        Err(BridgeError::InvalidPath(_))
    ));
    assert!(tree.get("").is_none());
}
