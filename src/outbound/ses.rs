use anyhow::Context;
use async_trait::async_trait;
use aws_sdk_sesv2::{
    self as ses,
    types::{Body, Content, Destination, EmailContent, Message},
};

use crate::domain::ports::Notifier;

/// Sends appointment emails through Amazon SES.
#[derive(Clone, Debug)]
pub struct SesNotifier {
    inner: ses::Client,
    from_email: String,
}

impl SesNotifier {
    pub fn new(inner: ses::Client, from_email: &str) -> Self {
        Self {
            inner,
            from_email: from_email.to_string(),
        }
    }

    async fn send(&self, to_email: &str, subject: &str, content: &str) -> anyhow::Result<()> {
        let mut dest: Destination = Destination::builder().build();
        dest.to_addresses = Some(vec![to_email.to_string()]);

        let subject_content = Content::builder()
            .data(subject)
            .charset("UTF-8")
            .build()
            .context("building Content")?;

        let body_content = Content::builder()
            .data(content)
            .charset("UTF-8")
            .build()
            .context("building Content")?;

        let body = Body::builder().html(body_content).build();

        let msg = Message::builder()
            .subject(subject_content)
            .body(body)
            .build();

        let email_content = EmailContent::builder().simple(msg).build();

        self.inner
            .send_email()
            .from_email_address(&self.from_email)
            .destination(dest)
            .content(email_content)
            .send()
            .await?;

        Ok(())
    }
}

#[async_trait]
impl Notifier for SesNotifier {
    #[tracing::instrument(skip(self, body))]
    async fn notify(&self, to: &str, subject: &str, body: &str) -> bool {
        match self.send(to, subject, body).await {
            Ok(()) => true,
            Err(err) => {
                tracing::error!(error = ?err, to, subject, "failed to send email");
                false
            }
        }
    }
}
