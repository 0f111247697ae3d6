use super::{ParamStore, StoreError, StoreResult};
use crate::model::{Classification, Parameter};
use aws_config::{BehaviorVersion, Region};
use aws_sdk_ssm::error::ProvideErrorMetadata;
use aws_sdk_ssm::types::ParameterType;
use aws_sdk_ssm::Client;
use tokio::runtime::Runtime;

/// AWS SSM Parameter Store backend.
///
/// Owns a current-thread tokio runtime and blocks on each SDK call — the
/// tool is synchronous end to end, one parameter at a time.
pub struct SsmStore {
    client: Client,
    runtime: Runtime,
}

impl SsmStore {
    /// Load the default AWS config (profile, env, IMDS) and build a client.
    /// `region` overrides the profile's region when given.
    pub fn connect(region: Option<String>) -> StoreResult<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|err| StoreError::Connection(err.to_string()))?;

        let config = runtime.block_on(async {
            let mut loader = aws_config::defaults(BehaviorVersion::latest());
            if let Some(region) = region {
                loader = loader.region(Region::new(region));
            }
            loader.load().await
        });

        Ok(Self {
            client: Client::new(&config),
            runtime,
        })
    }
}

impl ParamStore for SsmStore {
    fn get(&self, path: &str) -> StoreResult<Parameter> {
        let result = self.runtime.block_on(
            self.client
                .get_parameter()
                .name(path)
                .with_decryption(false)
                .send(),
        );
        match result {
            Ok(output) => {
                let param = output
                    .parameter
                    .ok_or_else(|| StoreError::NotFound(path.to_string()))?;
                Ok(Parameter::new(
                    param.name.unwrap_or_else(|| path.to_string()),
                    param.value.unwrap_or_default(),
                    classification_of(param.r#type.as_ref()),
                ))
            }
            Err(err) => {
                let service = err.into_service_error();
                if service.is_parameter_not_found() {
                    Err(StoreError::NotFound(path.to_string()))
                } else {
                    Err(api_error(&service))
                }
            }
        }
    }

    fn get_by_path(&self, prefix: &str, decrypt: bool) -> StoreResult<Vec<Parameter>> {
        let mut params = Vec::new();
        let mut next_token: Option<String> = None;

        loop {
            let mut request = self
                .client
                .get_parameters_by_path()
                .path(prefix)
                .recursive(true)
                .with_decryption(decrypt);
            if let Some(token) = next_token {
                request = request.next_token(token);
            }

            let output = self
                .runtime
                .block_on(request.send())
                .map_err(|err| api_error(&err.into_service_error()))?;

            for param in output.parameters.unwrap_or_default() {
                let Some(name) = param.name else { continue };
                params.push(Parameter::new(
                    name,
                    param.value.unwrap_or_default(),
                    classification_of(param.r#type.as_ref()),
                ));
            }

            next_token = output.next_token;
            if next_token.is_none() {
                break;
            }
        }

        Ok(params)
    }

    fn put(&mut self, param: &Parameter, overwrite: bool) -> StoreResult<()> {
        let result = self.runtime.block_on(
            self.client
                .put_parameter()
                .name(&param.path)
                .value(&param.value)
                .r#type(param_type(param.classification))
                .overwrite(overwrite)
                .send(),
        );
        match result {
            Ok(_) => Ok(()),
            Err(err) => {
                let service = err.into_service_error();
                if service.is_parameter_already_exists() {
                    Err(StoreError::AlreadyExists(param.path.clone()))
                } else {
                    Err(api_error(&service))
                }
            }
        }
    }

    fn delete(&mut self, path: &str) -> StoreResult<()> {
        let result = self
            .runtime
            .block_on(self.client.delete_parameter().name(path).send());
        match result {
            Ok(_) => Ok(()),
            Err(err) => {
                let service = err.into_service_error();
                if service.is_parameter_not_found() {
                    Err(StoreError::NotFound(path.to_string()))
                } else {
                    Err(api_error(&service))
                }
            }
        }
    }
}

fn classification_of(kind: Option<&ParameterType>) -> Classification {
    match kind {
        Some(ParameterType::SecureString) => Classification::Secret,
        _ => Classification::Plain,
    }
}

fn param_type(classification: Classification) -> ParameterType {
    match classification {
        Classification::Secret => ParameterType::SecureString,
        Classification::Plain => ParameterType::String,
    }
}

/// Keep the store's native error code and message when it has them;
/// otherwise fall back to the error's display form.
fn api_error<E>(err: &E) -> StoreError
where
    E: ProvideErrorMetadata + std::fmt::Display,
{
    match (err.code(), err.message()) {
        (Some(code), Some(message)) => StoreError::Api {
            code: code.to_string(),
            message: message.to_string(),
        },
        _ => StoreError::Connection(err.to_string()),
    }
}
