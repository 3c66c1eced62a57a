use chrono::{NaiveDate, Utc};
use futures::StreamExt;
use futures::channel::mpsc::{UnboundedSender, unbounded};
use sqlx::SqlitePool;
use tracing::{info, warn};
use uuid::Uuid;

/// Events forwarded to the notification service. Delivery is fire-and-forget:
/// a failed insert is logged and never surfaces to the primary operation.
#[derive(Debug)]
pub enum Event {
    DuplicateLog {
        recipient: String,
        date: NaiveDate,
        project: String,
    },
    LogApproved {
        recipient: String,
        log_id: String,
    },
}

impl Event {
    fn kind(&self) -> &'static str {
        match self {
            Event::DuplicateLog { .. } => "duplicate_warning",
            Event::LogApproved { .. } => "log_approved",
        }
    }
}

/// Sending half, cloned into app data. The worker task owns the receiving half
/// and lives until `NotifierHandle::stop` closes the channel.
#[derive(Clone)]
pub struct Notifier {
    tx: UnboundedSender<Event>,
}

pub struct NotifierHandle {
    tx: UnboundedSender<Event>,
    task: actix_web::rt::task::JoinHandle<()>,
}

impl Notifier {
    pub fn start(pool: SqlitePool) -> (Notifier, NotifierHandle) {
        let (tx, mut rx) = unbounded::<Event>();

        let task = actix_web::rt::spawn(async move {
            while let Some(event) = rx.next().await {
                if let Err(e) = deliver(&pool, &event).await {
                    warn!(error = %e, kind = event.kind(), "Failed to deliver notification");
                }
            }
            info!("Notification worker stopped");
        });

        let handle = NotifierHandle {
            tx: tx.clone(),
            task,
        };
        (Notifier { tx }, handle)
    }

    pub fn emit(&self, event: Event) {
        if let Err(e) = self.tx.unbounded_send(event) {
            warn!(error = %e, "Notification channel closed, event dropped");
        }
    }
}

impl NotifierHandle {
    /// Closes the channel and waits for queued events to drain.
    pub async fn stop(self) {
        self.tx.close_channel();
        let _ = self.task.await;
    }
}

async fn deliver(pool: &SqlitePool, event: &Event) -> Result<(), sqlx::Error> {
    let (recipient, log_id, message) = match event {
        Event::DuplicateLog {
            recipient,
            date,
            project,
        } => (
            recipient.clone(),
            None,
            format!("A log already exists for {date} / {project}"),
        ),
        Event::LogApproved { recipient, log_id } => (
            recipient.clone(),
            Some(log_id.clone()),
            format!("Log {log_id} was approved"),
        ),
    };

    sqlx::query(
        r#"
        INSERT INTO notifications (id, recipient, kind, message, log_id, created_at)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(Uuid::new_v4().to_string())
    .bind(recipient)
    .bind(event.kind())
    .bind(message)
    .bind(log_id)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(())
}
