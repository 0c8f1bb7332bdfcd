use super::SagaContext;
use crate::store::Action;

enum Wake {
    Poll,
    Listen(String),
    Pause,
}

fn listen_or_pause(action: &Action) -> Option<Wake> {
    match action {
        Action::StartNotificationListening(username) => Some(Wake::Listen(username.clone())),
        Action::LogoutReceived(Ok(_)) => Some(Wake::Pause),
        _ => None,
    }
}

fn listen(action: &Action) -> Option<String> {
    match action {
        Action::StartNotificationListening(username) => Some(username.clone()),
        _ => None,
    }
}

/// Polls the notifications for the logged in user until logout. A later
/// start switches to the new username, a logout pauses until the next start.
pub async fn start_notification_listening(mut context: SagaContext) {
    let Some(mut username) = context.take(listen).await else {
        return;
    };
    let interval = context.settings.notification_interval;

    loop {
        match context.api().notifications_to(username.clone()).await {
            Ok(notifications) => {
                for notification in notifications {
                    context.put(Action::NotificationReceived(notification));
                }
            }
            Err(e) => log::warn!("notification: {e}"),
        }

        let wake = tokio::select! {
            _ = tokio::time::sleep(interval) => Some(Wake::Poll),
            wake = context.take(listen_or_pause) => wake,
        };

        match wake {
            Some(Wake::Poll) => (),
            Some(Wake::Listen(next)) => {
                log::debug!("notification: now listening for {next}");
                username = next;
            }
            Some(Wake::Pause) => {
                log::debug!("notification: paused after logout");
                match context.take(listen).await {
                    Some(next) => username = next,
                    None => return,
                }
            }
            None => return,
        }
    }
}
