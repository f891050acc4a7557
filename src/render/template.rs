//! Static page assets embedded in every generated document.

/// Stylesheet for the chat page.
pub const PAGE_STYLE: &str = r#"
:root {
    --background-color: #f0f2f5; --chat-bubble-bg: #ffffff; --thread-bubble-bg: #f8f9fa;
    --text-primary: #050505; --text-secondary: #65676b; --accent-color: #0078FF;
    --border-color: #e4e6eb; --shadow-color: rgba(0, 0, 0, 0.05);
}
body {
    font-family: 'Inter', sans-serif; background-color: var(--background-color); color: var(--text-primary);
    margin: 0; padding: 20px; font-size: 15px; line-height: 1.5;
}
.main-container {
    max-width: 800px; margin: 0 auto; background-color: var(--chat-bubble-bg);
    border-radius: 12px; box-shadow: 0 4px 12px var(--shadow-color); overflow: hidden;
}
header { padding: 20px; background-color: var(--accent-color); color: white; text-align: center; }
header h1 { margin: 0; font-size: 1.5em; }
.chat-container { padding: 20px; }
.message-bubble {
    background-color: var(--chat-bubble-bg); border: 1px solid var(--border-color);
    border-radius: 12px; padding: 12px 16px; margin-bottom: 12px;
    box-shadow: 0 1px 3px var(--shadow-color);
}
.message-header { display: flex; align-items: baseline; margin-bottom: 6px; }
.sender { font-weight: 700; }
.timestamp { font-size: 0.8em; color: var(--text-secondary); margin-left: 8px; }
.message-body { word-wrap: break-word; }
.reactions { margin-top: 10px; display: flex; flex-wrap: wrap; gap: 6px; }
.reaction {
    background-color: var(--background-color); border: 1px solid var(--border-color);
    border-radius: 16px; padding: 4px 10px; font-size: 0.9em;
    cursor: default; user-select: none; transition: transform 0.1s ease-in-out;
}
.reaction:hover { transform: translateY(-1px); box-shadow: 0 2px 4px var(--shadow-color); }
.reaction-count { color: var(--text-secondary); font-size: 0.9em; margin-left: 4px; }
.thread-accordion { margin-top: 12px; border-top: 1px solid var(--border-color); padding-top: 12px; }
.thread-accordion summary { cursor: pointer; font-weight: 500; color: var(--accent-color); user-select: none; }
.thread-accordion summary::marker { color: var(--accent-color); }
.thread-accordion[open] > summary { margin-bottom: 10px; }
.thread-container { padding-left: 20px; border-left: 2px solid var(--accent-color); margin-top: 10px; }
.thread-container .message-bubble { background-color: var(--thread-bubble-bg); }
.custom-tooltip {
    position: absolute; background-color: #333; color: white;
    padding: 6px 10px; border-radius: 6px; font-size: 0.85em; z-index: 1000;
    max-width: 350px; box-shadow: 0 2px 8px rgba(0,0,0,0.2);
    pointer-events: none; opacity: 0; transition: opacity 0.1s ease-in-out;
}
.custom-tooltip.show { opacity: 1; }
"#;

/// Shows the reactor names of a reaction chip on hover.
pub const TOOLTIP_SCRIPT: &str = r#"
document.addEventListener('DOMContentLoaded', () => {
    let showTimeout;
    let tooltip = null;

    const hide = () => {
        clearTimeout(showTimeout);
        if (tooltip) {
            tooltip.remove();
            tooltip = null;
        }
    };

    document.querySelectorAll('.reaction').forEach(reaction => {
        reaction.addEventListener('mouseover', () => {
            const names = reaction.dataset.reactors;
            if (!names) return;
            hide();
            showTimeout = setTimeout(() => {
                if (!document.body.contains(reaction)) return;
                tooltip = document.createElement('div');
                tooltip.classList.add('custom-tooltip');
                tooltip.textContent = `Reacted by: ${names}`;
                document.body.appendChild(tooltip);
                const rect = reaction.getBoundingClientRect();
                tooltip.style.left = `${rect.left + window.scrollX}px`;
                tooltip.style.top = `${rect.bottom + window.scrollY + 8}px`;
                tooltip.classList.add('show');
            }, 100);
        });
        reaction.addEventListener('mouseout', hide);
    });

    document.addEventListener('scroll', hide);
});
"#;
