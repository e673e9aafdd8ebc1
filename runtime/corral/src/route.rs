//! The routing context: matched path parameters, as the router extracted them.

/// The key/value pairs the hosting router extracted from the matched route.
///
/// `corral` doesn't route requests itself: whatever router matched the
/// request is expected to store a `RouteContext` in the request's extensions
/// before [`from_path`](crate::binding::from_path) runs. Each parameter has
/// exactly one value; insertion order is preserved.
///
/// # Example
///
/// Bridging from a `matchit` router:
///
/// ```
/// use corral::RouteContext;
///
/// let mut router = matchit::Router::new();
/// router.insert("/users/{id}", ()).unwrap();
///
/// let matched = router.at("/users/42").unwrap();
/// let context: RouteContext = matched.params.into();
///
/// let mut request = http::Request::builder()
///     .uri("/users/42")
///     .body(())
///     .unwrap();
/// request.extensions_mut().insert(context);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteContext {
    params: Vec<(String, String)>,
}

impl RouteContext {
    /// Create an empty routing context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a matched path parameter.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.params.push((name.into(), value.into()));
    }

    /// The matched parameters, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Returns `true` if no parameters were recorded.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// The number of recorded parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }
}

impl From<matchit::Params<'_, '_>> for RouteContext {
    fn from(params: matchit::Params<'_, '_>) -> Self {
        let mut context = RouteContext::new();
        for (name, value) in params.iter() {
            context.insert(name, value);
        }
        context
    }
}
