use corral::{BindError, Bindable, RouteContext, RuleError, from_path};
use http::Request;

#[derive(Debug, Default, serde::Deserialize, Bindable)]
#[serde(default)]
struct Lookup {
    #[bind(required, trimlower)]
    value: String,
}

fn routed(route: &str, target: &str) -> Request<()> {
    let mut router = matchit::Router::new();
    router.insert(route, ()).unwrap();
    let context: RouteContext = router.at(target).unwrap().params.into();

    let mut request = Request::builder().uri(target).body(()).unwrap();
    request.extensions_mut().insert(context);
    request
}

#[test]
fn matched_parameters_bind_and_normalize() {
    let request = routed("/{value}", "/AOEU");
    let mut lookup = Lookup::default();
    from_path(&request, &mut lookup).unwrap();
    assert_eq!(lookup.value, "aoeu");
}

#[test]
fn parameter_names_are_lower_cased() {
    let request = routed("/{Value}", "/AOEU");
    let mut lookup = Lookup::default();
    from_path(&request, &mut lookup).unwrap();
    assert_eq!(lookup.value, "aoeu");
}

#[test]
fn binding_without_a_route_context_fails() {
    let request = Request::builder().uri("/AOEU").body(()).unwrap();
    let mut lookup = Lookup::default();
    let err = from_path(&request, &mut lookup).unwrap_err();
    assert!(matches!(err, BindError::MissingRouteContext(_)));
    insta::assert_snapshot!(err, @"No route context is attached to the incoming request");
}

#[derive(Debug, Default, serde::Deserialize, Bindable)]
#[serde(default)]
struct Numbered {
    id: String,
}

#[test]
fn path_values_are_never_coerced() {
    // A numeric-looking segment still lands in a string field: path values
    // skip the coercion step entirely.
    let request = routed("/items/{id}", "/items/42");
    let mut numbered = Numbered::default();
    from_path(&request, &mut numbered).unwrap();
    assert_eq!(numbered.id, "42");
}

#[test]
fn required_parameters_missing_from_the_route_fail() {
    let request = routed("/items/{id}", "/items/42");
    let mut lookup = Lookup::default();
    let err = from_path(&request, &mut lookup).unwrap_err();
    assert!(matches!(
        err,
        BindError::Rule(RuleError::MissingField { field: "value" })
    ));
}
