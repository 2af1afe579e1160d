use super::*;

fn recording_listener() -> (AuthListener, Arc<Mutex<Vec<AuthEvent>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let listener: AuthListener = Arc::new(move |event| sink.lock().unwrap().push(event));
    (listener, seen)
}

// =============================================================
// AuthChannel / Subscription
// =============================================================

#[test]
fn emit_reaches_subscribed_listener() {
    let channel = AuthChannel::new();
    let (listener, seen) = recording_listener();
    let _sub = channel.subscribe(listener);

    channel.emit(AuthEvent::SignedIn);
    channel.emit(AuthEvent::SignedOut);

    assert_eq!(*seen.lock().unwrap(), vec![AuthEvent::SignedIn, AuthEvent::SignedOut]);
}

#[test]
fn dropping_subscription_releases_listener() {
    let channel = AuthChannel::new();
    let (listener, seen) = recording_listener();
    let sub = channel.subscribe(listener);
    assert_eq!(channel.listener_count(), 1);

    drop(sub);
    channel.emit(AuthEvent::SignedIn);

    assert_eq!(channel.listener_count(), 0);
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn unsubscribe_releases_listener() {
    let channel = AuthChannel::new();
    let (listener, seen) = recording_listener();
    let sub = channel.subscribe(listener);
    assert!(sub.is_active());

    sub.unsubscribe();
    channel.emit(AuthEvent::UserUpdated);

    assert_eq!(channel.listener_count(), 0);
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn releasing_one_subscription_keeps_others() {
    let channel = AuthChannel::new();
    let (first, first_seen) = recording_listener();
    let (second, second_seen) = recording_listener();
    let first_sub = channel.subscribe(first);
    let _second_sub = channel.subscribe(second);

    drop(first_sub);
    channel.emit(AuthEvent::TokenRefreshed);

    assert!(first_seen.lock().unwrap().is_empty());
    assert_eq!(*second_seen.lock().unwrap(), vec![AuthEvent::TokenRefreshed]);
}

#[test]
fn subscription_outliving_channel_is_inactive_and_drops_cleanly() {
    let channel = AuthChannel::new();
    let (listener, _seen) = recording_listener();
    let sub = channel.subscribe(listener);

    drop(channel);

    assert!(!sub.is_active());
    drop(sub);
}

#[test]
fn listener_may_unsubscribe_itself_during_emit() {
    let channel = AuthChannel::new();
    let slot: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));
    let calls = Arc::new(AtomicU64::new(0));

    let slot_in = Arc::clone(&slot);
    let calls_in = Arc::clone(&calls);
    let listener: AuthListener = Arc::new(move |_| {
        calls_in.fetch_add(1, Ordering::SeqCst);
        let taken = slot_in.lock().unwrap().take();
        drop(taken);
    });
    *slot.lock().unwrap() = Some(channel.subscribe(listener));

    channel.emit(AuthEvent::SignedOut);
    channel.emit(AuthEvent::SignedOut);

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(channel.listener_count(), 0);
}

#[test]
fn subscription_debug_reports_state() {
    let channel = AuthChannel::new();
    let (listener, _seen) = recording_listener();
    let sub = channel.subscribe(listener);
    let rendered = format!("{sub:?}");
    assert!(rendered.contains("active: true"));
}

// =============================================================
// HttpAuthService
// =============================================================

#[test]
fn http_service_uses_configured_endpoints() {
    let config = AuthConfig {
        session_endpoint: "/market/api/auth/session".to_owned(),
        logout_endpoint: "/market/api/auth/logout".to_owned(),
    };
    let service = HttpAuthService::new(config.clone());
    assert_eq!(service.config(), &config);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_service_sign_out_notifies_even_when_backend_unavailable() {
    let service = HttpAuthService::new(AuthConfig::default());
    let (listener, seen) = recording_listener();
    let _sub = service.subscribe(listener);

    let result = futures::executor::block_on(service.sign_out());

    assert_eq!(result, Err(AuthError::Unavailable));
    assert_eq!(*seen.lock().unwrap(), vec![AuthEvent::SignedOut]);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_service_session_unavailable_off_browser() {
    let service = HttpAuthService::new(AuthConfig::default());
    let result = futures::executor::block_on(service.current_session());
    assert_eq!(result, Err(AuthError::Unavailable));
}

#[test]
fn auth_handle_shares_one_service() {
    let handle = AuthHandle::new(HttpAuthService::new(AuthConfig::default()));
    let a = handle.service();
    let b = handle.clone().service();
    assert!(Arc::ptr_eq(&a, &b));
}
