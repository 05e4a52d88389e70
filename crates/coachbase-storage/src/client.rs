use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;

/// Build an S3 client from the default AWS provider chain (environment,
/// profile, or the Lambda execution role).
pub async fn build_client() -> Client {
    let config = aws_config::defaults(BehaviorVersion::latest()).load().await;
    Client::new(&config)
}
