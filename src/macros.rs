/// Adds the per-call methods every endpoint builder shares.
///
/// The builder must have `client: &Client` and `options: RequestOptions`
/// fields and implement [`Endpoint`](crate::client::Endpoint).
macro_rules! request_builder {
    ($($builder:ident),+ $(,)?) => {
        $(
            impl $builder<'_> {
                /// Attaches an extra header to this call only.
                pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
                    self.options.header(name, value);
                    self
                }

                /// Deadline for this call, replacing the client-wide timeout.
                pub fn timeout(mut self, timeout: ::std::time::Duration) -> Self {
                    self.options.timeout(timeout);
                    self
                }

                /// The URL this builder would request.
                pub fn url(&self) -> $crate::client::Result<::url::Url> {
                    self.client.url(self)
                }

                /// Sends the request and decodes the response.
                pub async fn execute(
                    self,
                ) -> $crate::client::Result<<Self as $crate::client::Endpoint>::Response> {
                    self.client.execute(&self, &self.options).await
                }

                /// Sends the request, giving up with
                /// [`Error::Cancelled`](crate::client::Error::Cancelled) if
                /// `signal` completes first.
                pub async fn execute_until<F>(
                    self,
                    signal: F,
                ) -> $crate::client::Result<<Self as $crate::client::Endpoint>::Response>
                where
                    F: ::std::future::Future,
                {
                    self.client.execute_until(&self, &self.options, signal).await
                }
            }
        )+
    };
}

/// Generates setters that store a value into the builder's parameter bag.
/// Each setter marks its filter as set, so calling it again overwrites.
macro_rules! param_setters {
    ($builder:ident { $($(#[$doc:meta])* $field:ident: $ty:ty),+ $(,)? }) => {
        impl $builder<'_> {
            $(
                $(#[$doc])*
                pub fn $field(mut self, $field: $ty) -> Self {
                    self.params.$field = Some($field.into());
                    self
                }
            )+
        }
    };
}

/// Builds the segment list of [`Endpoint::path`](crate::client::Endpoint::path).
macro_rules! path {
    ($($segment:expr),* $(,)?) => {
        vec![$(::std::borrow::Cow::<str>::from($segment)),*]
    };
}
