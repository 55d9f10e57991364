use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Properties, PartialEq)]
pub struct NoticeProps {
    pub kind: NoticeKind,
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Notice)]
pub fn notice(props: &NoticeProps) -> Html {
    let (class, icon) = match props.kind {
        NoticeKind::Success => ("notice notice-success", "✔"),
        NoticeKind::Error => ("notice notice-error", "!"),
    };

    html! {
        <div class={class} role="status">
            <style>
                {r#"
                    @keyframes noticeIn {
                        from { opacity: 0; transform: scale(0.9); }
                        to { opacity: 1; transform: scale(1); }
                    }
                    .notice {
                        text-align: center;
                        animation: noticeIn 0.4s ease-out forwards;
                    }
                    .notice-success {
                        padding: 3rem 0;
                    }
                    .notice-error {
                        padding: 1rem;
                        margin-bottom: 1.5rem;
                        border-radius: 12px;
                        border: 1px solid rgba(239, 68, 68, 0.5);
                        background: rgba(239, 68, 68, 0.1);
                    }
                    .notice-icon {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        width: 64px;
                        height: 64px;
                        border-radius: 50%;
                        font-size: 2rem;
                        margin-bottom: 1rem;
                    }
                    .notice-success .notice-icon {
                        color: #4ade80;
                        border: 3px solid #4ade80;
                    }
                    .notice-error .notice-icon {
                        width: 32px;
                        height: 32px;
                        font-size: 1rem;
                        color: #f87171;
                        border: 2px solid #f87171;
                    }
                    .notice-title {
                        font-size: 1.25rem;
                        font-weight: bold;
                        color: #fff;
                        margin-bottom: 0.5rem;
                    }
                    .notice-body {
                        color: #cbd5e1;
                    }
                "#}
            </style>
            <div class="notice-icon">{icon}</div>
            <div class="notice-title">{props.title.clone()}</div>
            <div class="notice-body">{ for props.children.iter() }</div>
        </div>
    }
}
