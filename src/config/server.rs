use figment::{
  providers::{Env, Serialized},
  value::{Uncased, UncasedStr},
  Figment,
};
use serde::Deserialize;

use super::LoadError;

#[derive(Debug, Default, Deserialize)]
pub struct Server {
  #[serde(default)]
  pub db: super::Database,
  #[serde(default)]
  pub service: super::Service,
}

impl Server {
  /// Loads the server configuration from the shell environment,
  /// including variables declared in a `.env` file if there's any.
  pub fn load() -> Result<Self, LoadError> {
    dotenvy::dotenv().ok();
    Self::from_figment(&Self::figment())
  }

  /// Extracts and validates the server configuration from
  /// a [`Figment`] object.
  pub fn from_figment(figment: &Figment) -> Result<Self, LoadError> {
    let config = figment
      .extract::<Self>()
      .map_err(|e| LoadError::Parse(Box::new(e)))?;

    config.validate()?;
    Ok(config)
  }

  fn validate(&self) -> Result<(), LoadError> {
    let missing = self.db.missing_vars();
    if missing.is_empty() {
      return Ok(());
    }

    Err(LoadError::Missing(missing))
  }
}

impl Server {
  /// Variables holding free-form text. They are taken verbatim,
  /// so `DB_PASSWORD=007` stays `"007"` instead of becoming `7`.
  const TEXT_VARS: &'static [&'static str] =
    &["DB_HOST", "DB_USER", "DB_PASSWORD", "DB_NAME", "SERVICE_HOST"];

  const VARS: &'static [&'static str] = &[
    "DB_PORT",
    "DB_POOL_SIZE",
    "DB_MIN_IDLE",
    "DB_TIMEOUT_SECS",
    "DB_ENFORCE_TLS",
    "SERVICE_PORT",
    "SERVICE_TIMEOUT_SECS",
    "GRPC_PORT",
  ];

  /// Creates a base [`Figment`] object to load the server
  /// configuration. This function is there for loading and testing.
  pub(crate) fn figment() -> Figment {
    let figment = Figment::new().merge(Env::raw().only(Self::VARS).map(Self::key_path));

    // `Env` parses every value it reads, text variables are
    // merged as plain strings instead.
    Env::raw()
      .only(Self::TEXT_VARS)
      .map(Self::key_path)
      .iter()
      .fold(figment, |figment, (key, value)| {
        figment.merge(Serialized::default(key.as_str(), value))
      })
  }

  // figment splits nested keys by dots, so underscored
  // variables need an explicit mapping.
  fn key_path(key: &UncasedStr) -> Uncased<'_> {
    match key.as_str().to_ascii_uppercase().as_str() {
      "DB_HOST" => "db.host".into(),
      "DB_PORT" => "db.port".into(),
      "DB_USER" => "db.user".into(),
      "DB_PASSWORD" => "db.password".into(),
      "DB_NAME" => "db.name".into(),
      "DB_POOL_SIZE" => "db.pool_size".into(),
      "DB_MIN_IDLE" => "db.min_idle".into(),
      "DB_TIMEOUT_SECS" => "db.timeout_secs".into(),
      "DB_ENFORCE_TLS" => "db.enforce_tls".into(),
      "SERVICE_HOST" => "service.host".into(),
      "SERVICE_PORT" | "GRPC_PORT" => "service.port".into(),
      "SERVICE_TIMEOUT_SECS" => "service.timeout_secs".into(),
      _ => key.into(),
    }
  }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
  use super::*;
  use figment::Jail;
  use std::num::{NonZeroU32, NonZeroU64};

  fn set_required(jail: &mut Jail) {
    jail.set_env("DB_HOST", "db.internal");
    jail.set_env("DB_PORT", "5432");
    jail.set_env("DB_USER", "admin");
    jail.set_env("DB_PASSWORD", "s3cret-password");
    jail.set_env("DB_NAME", "users_db");
  }

  fn load() -> figment::error::Result<Server> {
    Server::from_figment(&Server::figment()).map_err(|e| e.to_string().into())
  }

  #[test]
  fn loads_required_vars_with_defaults() {
    Jail::expect_with(|jail| {
      jail.clear_env();
      set_required(jail);

      let config = load()?;
      assert_eq!(config.db.host, "db.internal");
      assert_eq!(config.db.port, 5432);
      assert_eq!(config.db.user, "admin");
      assert_eq!(config.db.password.as_str(), "s3cret-password");
      assert_eq!(config.db.name, "users_db");
      assert_eq!(config.db.pool_size, NonZeroU32::new(5).unwrap());
      assert_eq!(config.db.min_idle, None);
      assert!(!config.db.enforce_tls);

      assert_eq!(config.service.host, "0.0.0.0");
      assert_eq!(config.service.port, 8080);
      assert_eq!(config.service.timeout_secs, NonZeroU64::new(10).unwrap());

      Ok(())
    });
  }

  #[test]
  fn optional_vars_override_defaults() {
    Jail::expect_with(|jail| {
      jail.clear_env();
      set_required(jail);
      jail.set_env("DB_POOL_SIZE", "20");
      jail.set_env("DB_MIN_IDLE", "2");
      jail.set_env("DB_TIMEOUT_SECS", "30");
      jail.set_env("DB_ENFORCE_TLS", "true");
      jail.set_env("GRPC_PORT", "50051");
      jail.set_env("SERVICE_TIMEOUT_SECS", "3");

      let config = load()?;
      assert_eq!(config.db.pool_size, NonZeroU32::new(20).unwrap());
      assert_eq!(config.db.min_idle, NonZeroU32::new(2));
      assert_eq!(config.db.timeout_secs, NonZeroU64::new(30).unwrap());
      assert!(config.db.enforce_tls);
      assert_eq!(config.service.port, 50051);
      assert_eq!(config.service.timeout().as_secs(), 3);

      Ok(())
    });
  }

  #[test]
  fn reports_every_missing_var() {
    Jail::expect_with(|jail| {
      jail.clear_env();
      jail.set_env("DB_HOST", "db.internal");
      jail.set_env("DB_NAME", "users_db");

      let error = Server::from_figment(&Server::figment()).unwrap_err();
      let LoadError::Missing(missing) = &error else {
        panic!("expected missing variables error; got {error:?}");
      };
      assert_eq!(missing, &["DB_PORT", "DB_USER", "DB_PASSWORD"]);
      assert_eq!(
        error.to_string(),
        "missing or empty required configuration values: DB_PORT, DB_USER, DB_PASSWORD"
      );

      Ok(())
    });
  }

  #[test]
  fn rejects_malformed_port() {
    Jail::expect_with(|jail| {
      jail.clear_env();
      set_required(jail);
      jail.set_env("DB_PORT", "postgres");

      let error = Server::from_figment(&Server::figment()).unwrap_err();
      assert!(matches!(error, LoadError::Parse(..)));

      Ok(())
    });
  }

  #[test]
  fn password_is_hidden_from_debug() {
    Jail::expect_with(|jail| {
      jail.clear_env();
      set_required(jail);

      let config = load()?;
      assert!(!format!("{config:?}").contains("s3cret-password"));

      Ok(())
    });
  }

  #[test]
  fn text_vars_are_kept_verbatim() {
    Jail::expect_with(|jail| {
      jail.clear_env();
      set_required(jail);
      jail.set_env("DB_PASSWORD", "00712345");
      jail.set_env("DB_USER", "1000");
      jail.set_env("DB_NAME", "true");
      jail.set_env("DB_HOST", "10.0.0.7");

      let config = load()?;
      assert_eq!(config.db.password.as_str(), "00712345");
      assert_eq!(config.db.user, "1000");
      assert_eq!(config.db.name, "true");
      assert_eq!(config.db.host, "10.0.0.7");
      assert_eq!(config.db.port, 5432);

      Ok(())
    });
  }
}
