//! Notification sender client
//!
//! The email service is an external collaborator reached over HTTP. Sends
//! are best-effort from every caller's perspective: failures are logged and
//! swallowed at the call site, never retried or queued, so an unsent email
//! leaves only a log line as evidence.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Employee contact details emailed to the customer after an assignment.
/// Field names are the wire contract of the email service.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDetailsNotice {
    pub customer_email: String,
    pub customer_name: String,
    pub destination: String,
    pub employee_name: String,
    pub employee_phone: String,
    pub employee_email: String,
}

/// Login credentials emailed to a newly created employee
#[derive(Debug, Clone, Serialize)]
pub struct CredentialsNotice {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub destination: String,
}

/// Any of these is "notification failed" to the caller; none of them is
/// ever surfaced past the logging call site.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("sender rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("sender response missing messageId")]
    MalformedResponse,
}

/// Outbound notification channel
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Email the customer the assigned employee's contact details.
    async fn send_employee_details(
        &self,
        notice: &EmployeeDetailsNotice,
    ) -> Result<String, NotifyError>;

    /// Email a new employee their login credentials.
    async fn send_credentials(&self, notice: &CredentialsNotice) -> Result<String, NotifyError>;
}

/// HTTP implementation against the email service.
///
/// The injected client is expected to carry a bounded request timeout; a
/// timed-out send is treated like any other notification failure.
#[derive(Clone)]
pub struct HttpNotifier {
    client: reqwest::Client,
    base_url: String,
}

impl HttpNotifier {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    async fn post_json<T: Serialize>(&self, path: &str, body: &T) -> Result<String, NotifyError> {
        let url = format!("{}/{path}", self.base_url.trim_end_matches('/'));
        let resp = self.client.post(&url).json(body).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(NotifyError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let value: serde_json::Value = resp.json().await?;
        value["messageId"]
            .as_str()
            .map(String::from)
            .ok_or(NotifyError::MalformedResponse)
    }
}

#[async_trait]
impl Notifier for HttpNotifier {
    async fn send_employee_details(
        &self,
        notice: &EmployeeDetailsNotice,
    ) -> Result<String, NotifyError> {
        let id = self.post_json("send-employee-details", notice).await?;
        tracing::info!(to = %notice.customer_email, message_id = %id, "Employee details email sent");
        Ok(id)
    }

    async fn send_credentials(&self, notice: &CredentialsNotice) -> Result<String, NotifyError> {
        let id = self.post_json("send-credentials", notice).await?;
        tracing::info!(to = %notice.email, message_id = %id, "Credentials email sent");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_details_wire_format() {
        let notice = EmployeeDetailsNotice {
            customer_email: "asha@example.com".into(),
            customer_name: "Asha".into(),
            destination: "Kashmir".into(),
            employee_name: "Rahul".into(),
            employee_phone: "9999999999".into(),
            employee_email: "rahul@agency.com".into(),
        };

        let value = serde_json::to_value(&notice).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "customerEmail": "asha@example.com",
                "customerName": "Asha",
                "destination": "Kashmir",
                "employeeName": "Rahul",
                "employeePhone": "9999999999",
                "employeeEmail": "rahul@agency.com",
            })
        );
    }

    #[test]
    fn credentials_wire_format() {
        let notice = CredentialsNotice {
            name: "Rahul".into(),
            email: "rahul@agency.com".into(),
            password: "s3cret".into(),
            role: "employee".into(),
            destination: "Kashmir".into(),
        };

        let value = serde_json::to_value(&notice).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Rahul",
                "email": "rahul@agency.com",
                "password": "s3cret",
                "role": "employee",
                "destination": "Kashmir",
            })
        );
    }
}
